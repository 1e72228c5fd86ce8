/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Slab structure: a periodic cell holding a finite stack of atomic layers

use super::atom::{Atom, FIXED};
use super::cell::Cell;

/// A surface slab, periodic in-plane and padded with vacuum along the third axis
#[derive(Debug, Clone, PartialEq)]
pub struct SlabStructure {
    /// Simulation cell in Angstrom
    cell: Cell,
    /// Atoms of the slab
    atoms: Vec<Atom>,
}

impl SlabStructure {
    /// Create an empty slab in the given cell
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            atoms: Vec::new(),
        }
    }

    /// Get the simulation cell
    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    /// Add an atom and return its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Get a slice of all atoms
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Get the number of atoms
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Lowest z coordinate of any atom
    pub fn bottom_z(&self) -> Option<f64> {
        self.atoms
            .iter()
            .map(|a| a.position().z)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Highest z coordinate of any atom
    pub fn top_z(&self) -> Option<f64> {
        self.atoms
            .iter()
            .map(|a| a.position().z)
            .max_by(|a, b| a.total_cmp(b))
    }

    /// Freeze every atom whose z coordinate lies below `z`
    ///
    /// Returns the number of atoms that were frozen.
    pub fn fix_atoms_below(&mut self, z: f64) -> usize {
        let mut frozen = 0;
        for atom in self.atoms.iter_mut().filter(|a| a.position().z < z) {
            atom.set_movable(FIXED);
            frozen += 1;
        }
        frozen
    }

    /// Number of atoms free to move along at least one axis
    pub fn free_atom_count(&self) -> usize {
        self.atoms.iter().filter(|a| a.is_free()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Vector3D;

    fn three_layer_slab() -> SlabStructure {
        let mut slab = SlabStructure::new(Cell::orthorhombic(2.864, 4.96, 30.0));
        for z in [10.0, 12.338, 14.676] {
            slab.add_atom(Atom::new("Al", Vector3D::new(0.0, 0.0, z)).unwrap());
        }
        slab
    }

    #[test]
    fn test_bottom_and_top() {
        let slab = three_layer_slab();
        assert_eq!(slab.bottom_z(), Some(10.0));
        assert_eq!(slab.top_z(), Some(14.676));
        assert_eq!(SlabStructure::new(Cell::orthorhombic(1.0, 1.0, 1.0)).bottom_z(), None);
    }

    #[test]
    fn test_fix_atoms_below() {
        let mut slab = three_layer_slab();
        assert_eq!(slab.fix_atoms_below(11.0), 1);
        assert_eq!(slab.free_atom_count(), 2);
        assert!(!slab.atoms()[0].is_free());
    }
}
