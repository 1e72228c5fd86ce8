/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use rstest::rstest;
use slab_efield::field::{in_plane_area_bohr, total_charge, ChargeSetup, FieldTargets};
use slab_efield::structure::{Atom, Cell, SlabStructure, Vector3D};
use std::f64::consts::PI;

fn fcc111_cell(a0: f64, vacuum: f64) -> Cell {
    // 1x1 surface cell of an fcc(111) slab with lattice constant a0
    let a = a0 / 2f64.sqrt();
    Cell::from([
        [a, 0.0, 0.0],
        [a / 2.0, a * 3f64.sqrt() / 2.0, 0.0],
        [0.0, 0.0, vacuum],
    ])
}

#[rstest]
#[case(0.05, -0.05)]
#[case(0.05, -0.025)]
#[case(-0.01, 0.02)]
#[case(0.0, 0.0)]
fn test_closed_form(#[case] right: f64, #[case] left: f64) {
    for cell in [Cell::orthorhombic(4.0, 4.0, 30.0), fcc111_cell(4.05, 40.0)] {
        let bohr = cell.to_bohr();
        let area = bohr.vectors()[0].cross(&bohr.vectors()[1]).length();
        let expected = (right - left) * area / (4.0 * PI);
        assert_relative_eq!(total_charge(right, left, &cell), expected, epsilon = 1e-12);
    }
}

#[rstest]
#[case(0.05, -0.05)]
#[case(0.05, -0.025)]
#[case(0.3, 0.1)]
fn test_swap_and_negate(#[case] right: f64, #[case] left: f64) {
    let cell = fcc111_cell(4.05, 40.0);
    assert_relative_eq!(
        total_charge(-left, -right, &cell),
        total_charge(right, left, &cell),
        epsilon = 1e-12
    );
}

#[rstest]
#[case(0.0)]
#[case(0.05)]
#[case(-0.025)]
fn test_equal_fields(#[case] field: f64) {
    let cell = fcc111_cell(4.05, 40.0);
    assert_eq!(total_charge(field, field, &cell), 0.0);
}

#[test]
fn test_orthorhombic_scenario() {
    let a = 4.0;
    let cell = Cell::orthorhombic(a, a, 25.0);

    let area = in_plane_area_bohr(&cell);
    assert_relative_eq!(area, (1.8897 * a) * (1.8897 * a), epsilon = 1e-10);

    let q = total_charge(0.05, -0.05, &cell);
    assert_relative_eq!(q, 0.10 * (1.8897 * a).powi(2) / (4.0 * PI), epsilon = 1e-12);
    assert_relative_eq!(q, 0.4550, epsilon = 1e-3);
}

#[test]
fn test_degenerate_cell_gives_zero_charge() {
    let cell = Cell::from([[3.0, 0.0, 0.0], [-1.5, 0.0, 0.0], [0.0, 0.0, 20.0]]);
    assert_eq!(total_charge(0.05, -0.05, &cell), 0.0);
}

#[test]
fn test_setup_for_al111_slab() {
    let cell = fcc111_cell(4.05, 40.0);
    let mut slab = SlabStructure::new(cell);
    let d = 4.05 / 3f64.sqrt();
    for layer in 0..3 {
        slab.add_atom(Atom::new("Al", Vector3D::new(0.0, 0.0, 15.0 + d * layer as f64)).unwrap());
    }

    let targets = FieldTargets::new(0.05, -0.05);
    let setup = ChargeSetup::derive(targets, &slab);

    assert_relative_eq!(setup.total_charge, total_charge(0.05, -0.05, &cell), epsilon = 1e-12);
    assert_eq!(setup.n_excess_electrons, -setup.total_charge);
    assert_relative_eq!(setup.z_field_ev, -0.05 * 27.2114, epsilon = 1e-12);
    assert_relative_eq!(setup.sheet_z_bohr, 15.0 * 1.8897, epsilon = 1e-12);
    assert!(setup.total_charge > 0.0);
}
