/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Planar averaging of a 3D potential
//!
//! Reduces a potential grid to a 1D profile along one axis by taking the
//! arithmetic mean over the two remaining axes at every index.

use super::errors::{PotentialError, Result};
use super::grid::PotentialGrid;
use ndarray::{Array1, ArrayView3, Axis};
use rayon::prelude::*;

/// Lazy planar average along one axis
///
/// Yields one mean per index along `axis`. Cloning restarts the reduction from
/// the current position, so the sequence can be walked more than once.
#[derive(Debug, Clone)]
pub struct PlanarAverages<'a> {
    values: ArrayView3<'a, f64>,
    axis: Axis,
    slice_len: usize,
    next: usize,
    end: usize,
}

impl<'a> PlanarAverages<'a> {
    /// Set up the averaging over `grid` along `axis`
    pub fn new(grid: &'a PotentialGrid, axis: usize) -> Result<Self> {
        let shape = grid.shape();
        let slice_len = in_plane_len(shape, axis)?;

        Ok(Self {
            values: grid.view(),
            axis: Axis(axis),
            slice_len,
            next: 0,
            end: shape[axis],
        })
    }

    fn slice_mean(&self, index: usize) -> f64 {
        self.values.index_axis(self.axis, index).sum() / self.slice_len as f64
    }
}

impl Iterator for PlanarAverages<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        let mean = self.slice_mean(self.next);
        self.next += 1;
        Some(mean)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlanarAverages<'_> {}

/// Planar average of `grid` along `axis`
///
/// The result has exactly `grid.shape()[axis]` entries. Slices are reduced in
/// parallel.
pub fn planar_average(grid: &PotentialGrid, axis: usize) -> Result<Array1<f64>> {
    let shape = grid.shape();
    let slice_len = in_plane_len(shape, axis)? as f64;
    let values = grid.view();

    let means: Vec<f64> = (0..shape[axis])
        .into_par_iter()
        .map(|k| values.index_axis(Axis(axis), k).sum() / slice_len)
        .collect();

    Ok(Array1::from_vec(means))
}

/// Number of samples in one in-plane slice
fn in_plane_len(shape: [usize; 3], axis: usize) -> Result<usize> {
    if axis >= 3 {
        return Err(PotentialError::InvalidAxis(axis));
    }
    let len: usize = shape
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != axis)
        .map(|(_, &n)| n)
        .product();
    if len == 0 {
        return Err(PotentialError::EmptySlice(shape));
    }
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array3;

    fn ramp_grid() -> PotentialGrid {
        // V(i, j, k) = k + 0.1 * (i - j)
        PotentialGrid::new(Array3::from_shape_fn((3, 3, 5), |(i, j, k)| {
            k as f64 + 0.1 * (i as f64 - j as f64)
        }))
    }

    #[test]
    fn test_average_along_z() {
        let avg = planar_average(&ramp_grid(), 2).unwrap();
        assert_eq!(avg.len(), 5);
        for (k, v) in avg.iter().enumerate() {
            assert_relative_eq!(*v, k as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_lazy_matches_parallel() {
        let grid = ramp_grid();
        for axis in 0..3 {
            let lazy: Vec<f64> = PlanarAverages::new(&grid, axis).unwrap().collect();
            let eager = planar_average(&grid, axis).unwrap();
            assert_eq!(lazy.len(), grid.shape()[axis]);
            for (a, b) in lazy.iter().zip(eager.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_restartable() {
        let grid = ramp_grid();
        let mut averages = PlanarAverages::new(&grid, 2).unwrap();
        averages.next();
        let snapshot = averages.clone();
        assert_eq!(averages.len(), 4);
        let first: Vec<f64> = averages.collect();
        let second: Vec<f64> = snapshot.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_axis() {
        assert!(matches!(
            planar_average(&ramp_grid(), 3),
            Err(PotentialError::InvalidAxis(3))
        ));
    }

    #[test]
    fn test_empty_in_plane_slice() {
        let grid = PotentialGrid::uniform([0, 4, 6], 1.0);
        assert!(matches!(
            planar_average(&grid, 2),
            Err(PotentialError::EmptySlice(_))
        ));
        // an empty out-of-plane axis is fine and gives an empty profile
        let grid = PotentialGrid::uniform([2, 2, 0], 1.0);
        assert!(planar_average(&grid, 2).unwrap().is_empty());
    }
}
