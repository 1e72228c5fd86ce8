/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Jobs submitted to an engine and what comes back

use crate::input::JobConfig;
use crate::potential::PotentialGrid;
use crate::structure::SlabStructure;

/// Everything the engine needs for one relaxation
#[derive(Debug, Clone, PartialEq)]
pub struct EngineJob {
    /// Slab with per-atom motion flags
    pub structure: SlabStructure,
    /// Numerical and Hamiltonian options
    pub config: JobConfig,
}

/// Completion status reported by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum RunStatus {
    Finished,
    Failed(String),
}

/// Result of a finished engine run
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutcome {
    pub status: RunStatus,
    /// Electrostatic potential of the final geometry, in eV
    pub potential: Option<PotentialGrid>,
}

impl EngineOutcome {
    /// Successful run carrying a potential
    pub fn finished(potential: PotentialGrid) -> Self {
        Self {
            status: RunStatus::Finished,
            potential: Some(potential),
        }
    }

    /// Failed run
    pub fn failed(reason: &str) -> Self {
        Self {
            status: RunStatus::Failed(reason.to_string()),
            potential: None,
        }
    }
}
