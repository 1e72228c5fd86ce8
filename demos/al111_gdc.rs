/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Example field setup for an Al(111) slab
//!
//! Builds a three-layer Al(111) slab, derives the compensating charge for both
//! tutorial field settings and replays a model potential through the workflow.

use ndarray::Array3;
use slab_efield::engine::{CsvProfileWriter, EngineOutcome, ReplayEngine};
use slab_efield::field::FieldTargets;
use slab_efield::input::RunParams;
use slab_efield::potential::PotentialGrid;
use slab_efield::structure::{Atom, Cell, SlabStructure, Vector3D};
use slab_efield::workflow::FieldRelaxation;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Al fcc lattice constant in Angstrom
    let a0 = 4.05;
    let a = a0 / 2f64.sqrt();
    let d = a0 / 3f64.sqrt();
    let vacuum = 30.0;

    let cell = Cell::from([
        [a, 0.0, 0.0],
        [a / 2.0, a * 3f64.sqrt() / 2.0, 0.0],
        [0.0, 0.0, 2.0 * d + vacuum],
    ]);
    let mut slab = SlabStructure::new(cell);

    // ABC stacking
    let shifts = [(0.0, 0.0), (a / 2.0, a / (2.0 * 3f64.sqrt())), (a, a / 3f64.sqrt())];
    for (layer, (x, y)) in shifts.iter().enumerate() {
        let z = vacuum / 2.0 + d * layer as f64;
        slab.add_atom(Atom::new("Al", Vector3D::new(*x, *y, z))?);
    }
    slab.fix_atoms_below(vacuum / 2.0 + 0.5 * d);

    for left_field in [-0.05, -0.025] {
        let targets = FieldTargets::new(0.05, left_field);
        let relaxation = FieldRelaxation::new(slab.clone(), targets, RunParams::default())?;
        let setup = relaxation.setup();
        println!(
            "left field {:+.3}: charge {:.5} e, nExcessElectrons {:.5}, zField {:.5} eV/Bohr",
            left_field, setup.total_charge, setup.n_excess_electrons, setup.z_field_ev
        );
    }

    // model potential: flat inside the slab, linear in the vacuum regions
    let nz = 120;
    let length = cell.vector_length(2)?;
    let bottom = vacuum / 2.0;
    let top = bottom + 2.0 * d;
    let potential = PotentialGrid::new(Array3::from_shape_fn((8, 8, nz), |(_, _, k)| {
        let z = length * k as f64 / (nz - 1) as f64;
        if z < bottom {
            -0.5 * (bottom - z)
        } else if z > top {
            1.0 * (z - top)
        } else {
            0.0
        }
    }));

    let relaxation = FieldRelaxation::new(slab, FieldTargets::new(0.05, -0.05), RunParams::default())?;
    let mut engine = ReplayEngine::new(EngineOutcome::finished(potential));
    let mut sink = CsvProfileWriter::new(std::io::stdout());
    let report = relaxation.run(&mut engine, &mut sink)?;

    if let Some(vacuum) = report.vacuum {
        eprintln!("vacuum step: {:.4} eV", vacuum.step());
    }

    Ok(())
}
