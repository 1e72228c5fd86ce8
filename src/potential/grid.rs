/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Electrostatic potential sampled on a regular 3D grid

use super::errors::{PotentialError, Result};
use ndarray::{Array3, ArrayView3};
use serde::{Deserialize, Serialize};

/// Electrostatic potential sample on a regular real-space grid
///
/// Indexed as `[i, j, k]` along the three lattice vectors. On disk the grid is
/// a JSON object `{"shape": [n1, n2, n3], "data": [...]}` with `data` in
/// row-major order (last index fastest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord", into = "GridRecord")]
pub struct PotentialGrid {
    values: Array3<f64>,
}

#[derive(Serialize, Deserialize)]
struct GridRecord {
    shape: [usize; 3],
    data: Vec<f64>,
}

impl PotentialGrid {
    /// Wrap an existing array
    pub fn new(values: Array3<f64>) -> Self {
        Self { values }
    }

    /// Build a grid from a shape and row-major flat data
    pub fn from_shape_vec(shape: [usize; 3], data: Vec<f64>) -> Result<Self> {
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or(PotentialError::GridTooLarge(shape))?;
        if data.len() != expected {
            return Err(PotentialError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        let values = Array3::from_shape_vec((shape[0], shape[1], shape[2]), data).map_err(|_| {
            PotentialError::ShapeMismatch {
                shape,
                expected,
                actual: expected,
            }
        })?;
        Ok(Self { values })
    }

    /// Grid filled with a single value
    pub fn uniform(shape: [usize; 3], value: f64) -> Self {
        Self {
            values: Array3::from_elem((shape[0], shape[1], shape[2]), value),
        }
    }

    /// Grid extents along the three axes
    pub fn shape(&self) -> [usize; 3] {
        let s = self.values.shape();
        [s[0], s[1], s[2]]
    }

    /// Borrowed view of the samples
    pub fn view(&self) -> ArrayView3<'_, f64> {
        self.values.view()
    }

    /// Consume the grid and return the samples
    pub fn into_inner(self) -> Array3<f64> {
        self.values
    }
}

impl TryFrom<GridRecord> for PotentialGrid {
    type Error = PotentialError;

    fn try_from(record: GridRecord) -> Result<Self> {
        Self::from_shape_vec(record.shape, record.data)
    }
}

impl From<PotentialGrid> for GridRecord {
    fn from(grid: PotentialGrid) -> Self {
        let shape = grid.shape();
        // as_standard_layout keeps row-major order for transposed inputs
        let data = grid.values.as_standard_layout().iter().copied().collect();
        Self { shape, data }
    }
}
