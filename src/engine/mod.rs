/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Seams to the external DFT engine and to plotting
//!
//! The engine itself (SCF solver, geometry optimizer, dipole-correction
//! numerics) lives outside this crate. Implementations of
//! [`SimulationEngine`] submit a job, block until it completes and hand back
//! the final electrostatic potential.

pub mod errors;
mod job;
mod plot;
mod replay;

pub use errors::{EngineError, Result};
pub use job::{EngineJob, EngineOutcome, RunStatus};
pub use plot::{AxisLabels, CsvProfileWriter, PlotSink};
pub use replay::ReplayEngine;

/// A blocking DFT engine
///
/// `run` returns once the job has finished. There is no timeout or
/// cancellation; failures are reported through [`RunStatus::Failed`] or an
/// error and are never retried by callers in this crate.
pub trait SimulationEngine {
    /// Short engine name for log messages
    fn name(&self) -> &str;

    /// Run a job to completion
    fn run(&mut self, job: &EngineJob) -> Result<EngineOutcome>;
}
