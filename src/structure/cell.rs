/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic simulation cell

use super::errors::{Result, StructureError};
use super::vector::Vector3D;
use crate::utils::constants::ANGSTROM_TO_BOHR;
use serde::{Deserialize, Serialize};

/// Simulation cell given by three lattice row-vectors
///
/// Lengths are in whatever unit the vectors were built with; slabs are read in
/// Angstrom and converted with [`Cell::to_bohr`] before any electrostatics.
/// Serialized as a 3×3 nested array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 3]; 3]", into = "[[f64; 3]; 3]")]
pub struct Cell {
    vectors: [Vector3D; 3],
}

impl Cell {
    /// Create a cell from three lattice vectors
    pub fn new(a1: Vector3D, a2: Vector3D, a3: Vector3D) -> Self {
        Self {
            vectors: [a1, a2, a3],
        }
    }

    /// Orthorhombic cell with edge lengths `a`, `b`, `c`
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self::new(
            Vector3D::new(a, 0.0, 0.0),
            Vector3D::new(0.0, b, 0.0),
            Vector3D::new(0.0, 0.0, c),
        )
    }

    /// All three lattice vectors
    pub fn vectors(&self) -> &[Vector3D; 3] {
        &self.vectors
    }

    /// Lattice vector along `axis`
    pub fn vector(&self, axis: usize) -> Result<Vector3D> {
        self.vectors
            .get(axis)
            .copied()
            .ok_or(StructureError::InvalidAxis(axis))
    }

    /// Length of the lattice vector along `axis`
    pub fn vector_length(&self, axis: usize) -> Result<f64> {
        Ok(self.vector(axis)?.length())
    }

    /// Scale every lattice vector by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        let [a1, a2, a3] = self.vectors;
        Self::new(a1 * factor, a2 * factor, a3 * factor)
    }

    /// Copy of the cell with Angstrom lengths converted to Bohr
    pub fn to_bohr(&self) -> Self {
        self.scaled(ANGSTROM_TO_BOHR)
    }

    /// Area spanned by the two in-plane vectors, `|a1 × a2|`
    ///
    /// Collinear in-plane vectors give zero.
    pub fn in_plane_area(&self) -> f64 {
        self.vectors[0].cross(&self.vectors[1]).length()
    }
}

impl From<[[f64; 3]; 3]> for Cell {
    fn from(m: [[f64; 3]; 3]) -> Self {
        Self::new(m[0].into(), m[1].into(), m[2].into())
    }
}

impl From<Cell> for [[f64; 3]; 3] {
    fn from(cell: Cell) -> Self {
        let [a1, a2, a3] = cell.vectors;
        [a1.into(), a2.into(), a3.into()]
    }
}
