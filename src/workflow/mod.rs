/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Field-biased slab relaxation workflow
//!
//! One pass: derive the compensating charge from the target fields, configure
//! the engine job, run it, average the returned potential along the surface
//! normal and hand the profile to a plot sink.

pub mod errors;

pub use errors::{Result, WorkflowError};

use crate::engine::{
    AxisLabels, EngineError, EngineJob, PlotSink, RunStatus, SimulationEngine,
};
use crate::field::{ChargeSetup, FieldTargets};
use crate::input::{HamiltonianParams, InputError, JobConfig, RunFile, RunParams};
use crate::potential::{PotentialProfile, VacuumLevels};
use crate::structure::SlabStructure;
use log::{debug, info, warn};
use serde::Serialize;

/// Number of profile points per side used for the vacuum levels
const VACUUM_WINDOW: usize = 3;

/// A prepared relaxation of a slab under an external field
#[derive(Debug, Clone)]
pub struct FieldRelaxation {
    structure: SlabStructure,
    setup: ChargeSetup,
    config: JobConfig,
    axis: usize,
}

/// What a finished relaxation produced
#[derive(Debug, Clone, Serialize)]
pub struct RelaxationReport {
    /// Charge setup the job was configured with
    pub setup: ChargeSetup,
    /// Planar-averaged electrostatic potential
    pub profile: PotentialProfile,
    /// Vacuum levels on both sides, when the profile is long enough
    pub vacuum: Option<VacuumLevels>,
}

impl FieldRelaxation {
    /// Prepare a relaxation with the dipole correction switched on
    pub fn new(structure: SlabStructure, targets: FieldTargets, params: RunParams) -> Result<Self> {
        // the averaging axis must exist before the engine is ever called
        structure
            .cell()
            .vector_length(params.axis)
            .map_err(InputError::from)?;

        let setup = ChargeSetup::derive(targets, &structure);
        if setup.area_bohr2 == 0.0 {
            warn!("in-plane lattice vectors are collinear; compensating charge is zero");
        }

        let config = JobConfig {
            energy_cutoff_ev: params.energy_cutoff_ev,
            kpoints: params.kpoints,
            initial_charge: Some(setup.charge_sheet()),
            hamiltonian: HamiltonianParams {
                n_excess_electrons: setup.n_excess_electrons,
                dipole_correction: true,
                z_field: setup.z_field_ev,
            },
        };
        config.validate()?;

        Ok(Self {
            structure,
            setup,
            config,
            axis: params.axis,
        })
    }

    /// Prepare a relaxation from a run file
    pub fn from_run_file(run: &RunFile) -> Result<Self> {
        run.validate()?;
        Self::new(run.structure()?, run.fields, run.params())
    }

    /// Derived charge setup
    pub fn setup(&self) -> &ChargeSetup {
        &self.setup
    }

    /// Engine configuration
    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    /// Job as submitted to the engine
    pub fn job(&self) -> EngineJob {
        EngineJob {
            structure: self.structure.clone(),
            config: self.config,
        }
    }

    /// Run the engine once and post-process its potential
    ///
    /// A failed run stops the workflow; nothing is retried.
    pub fn run<E, S>(&self, engine: &mut E, sink: &mut S) -> Result<RelaxationReport>
    where
        E: SimulationEngine + ?Sized,
        S: PlotSink + ?Sized,
    {
        info!(
            "submitting {} atoms to {} (charge {:.6} e, zField {:.6} eV/Bohr)",
            self.structure.atom_count(),
            engine.name(),
            self.setup.total_charge,
            self.setup.z_field_ev
        );
        for (name, value) in self.config.field_effects() {
            debug!("  {} = {}", name, value);
        }

        let outcome = engine.run(&self.job())?;
        if let RunStatus::Failed(reason) = outcome.status {
            return Err(EngineError::RunFailed(reason).into());
        }
        let potential = outcome.potential.ok_or(EngineError::MissingPotential)?;
        info!("engine finished, potential grid {:?}", potential.shape());

        let profile = PotentialProfile::from_grid(&potential, self.structure.cell(), self.axis)?;
        let vacuum = if profile.len() >= 2 * VACUUM_WINDOW {
            let levels = profile.vacuum_levels(VACUUM_WINDOW)?;
            info!(
                "vacuum levels {:.4} / {:.4} eV (step {:.4} eV)",
                levels.left,
                levels.right,
                levels.step()
            );
            Some(levels)
        } else {
            None
        };

        sink.plot(&profile.z, &profile.v, &AxisLabels::default())?;

        Ok(RelaxationReport {
            setup: self.setup,
            profile,
            vacuum,
        })
    }
}
