/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use ndarray::Array3;
use rstest::rstest;
use slab_efield::potential::{planar_average, PlanarAverages, PotentialGrid, PotentialProfile};
use slab_efield::structure::Cell;

/// Potential of a slab in a field: flat inside, linear outside, with an
/// in-plane corrugation that averages out
fn slab_potential(shape: (usize, usize, usize)) -> PotentialGrid {
    let (nx, ny, _) = shape;
    PotentialGrid::new(Array3::from_shape_fn(shape, |(i, j, k)| {
        let corrugation = (i as f64 - (nx as f64 - 1.0) / 2.0) * (j as f64 - (ny as f64 - 1.0) / 2.0);
        let z = k as f64;
        let base = if z < 10.0 { -0.1 * z } else { -1.0 };
        base + 0.01 * corrugation
    }))
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
fn test_length_matches_axis_extent(#[case] axis: usize) {
    let grid = PotentialGrid::uniform([3, 5, 7], 0.0);
    let avg = planar_average(&grid, axis).unwrap();
    assert_eq!(avg.len(), grid.shape()[axis]);
    assert_eq!(PlanarAverages::new(&grid, axis).unwrap().len(), grid.shape()[axis]);
}

#[rstest]
#[case(0, 2.5)]
#[case(1, -7.0)]
#[case(2, 0.125)]
fn test_uniform_potential_gives_constant_profile(#[case] axis: usize, #[case] k: f64) {
    let grid = PotentialGrid::uniform([4, 6, 8], k);
    let avg = planar_average(&grid, axis).unwrap();
    assert!(avg.iter().all(|&v| (v - k).abs() < 1e-12));
}

#[test]
fn test_permutation_within_slice() {
    let shape = (4, 3, 6);
    let grid = slab_potential(shape);
    let mut permuted = grid.clone().into_inner();

    // reverse both in-plane axes: every slice keeps the same multiset of values
    permuted.invert_axis(ndarray::Axis(0));
    permuted.invert_axis(ndarray::Axis(1));
    // and swap two samples of the first slice
    let tmp = permuted[[0, 0, 0]];
    permuted[[0, 0, 0]] = permuted[[3, 2, 0]];
    permuted[[3, 2, 0]] = tmp;
    let permuted = PotentialGrid::new(permuted);

    let a = planar_average(&grid, 2).unwrap();
    let b = planar_average(&permuted, 2).unwrap();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

#[test]
fn test_corrugation_averages_out() {
    let grid = slab_potential((5, 5, 20));
    let profile = PotentialProfile::from_grid(&grid, &Cell::orthorhombic(4.0, 4.0, 19.0), 2).unwrap();

    assert_eq!(profile.len(), 20);
    assert_relative_eq!(profile.z[19], 19.0);
    assert_relative_eq!(profile.z[1] - profile.z[0], 1.0, epsilon = 1e-12);
    for (k, v) in profile.v.iter().enumerate() {
        let expected = if k < 10 { -0.1 * k as f64 } else { -1.0 };
        assert_relative_eq!(*v, expected, epsilon = 1e-12);
    }

    let levels = profile.vacuum_levels(3).unwrap();
    assert_relative_eq!(levels.left, -0.1, epsilon = 1e-12);
    assert_relative_eq!(levels.right, -1.0, epsilon = 1e-12);
}

#[test]
fn test_profile_axis_must_exist_in_cell() {
    let grid = PotentialGrid::uniform([2, 2, 2], 0.0);
    assert!(PotentialProfile::from_grid(&grid, &Cell::orthorhombic(1.0, 1.0, 1.0), 3).is_err());
}
