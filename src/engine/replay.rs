/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Engine that replays a recorded outcome
//!
//! Used to post-process a run that already finished elsewhere: the recorded
//! potential is handed back as if the engine had just produced it.

use super::errors::{EngineError, Result};
use super::job::{EngineJob, EngineOutcome};
use super::SimulationEngine;

/// Engine returning a prerecorded outcome exactly once
#[derive(Debug, Clone)]
pub struct ReplayEngine {
    outcome: Option<EngineOutcome>,
    submitted: Vec<EngineJob>,
}

impl ReplayEngine {
    pub fn new(outcome: EngineOutcome) -> Self {
        Self {
            outcome: Some(outcome),
            submitted: Vec::new(),
        }
    }

    /// Jobs received so far
    pub fn submitted(&self) -> &[EngineJob] {
        &self.submitted
    }
}

impl SimulationEngine for ReplayEngine {
    fn name(&self) -> &str {
        "replay"
    }

    fn run(&mut self, job: &EngineJob) -> Result<EngineOutcome> {
        self.submitted.push(job.clone());
        self.outcome
            .take()
            .ok_or_else(|| EngineError::Rejected("recorded outcome already replayed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::JobConfig;
    use crate::potential::PotentialGrid;
    use crate::structure::{Cell, SlabStructure};

    #[test]
    fn test_replays_once() {
        let job = EngineJob {
            structure: SlabStructure::new(Cell::orthorhombic(1.0, 1.0, 1.0)),
            config: JobConfig::new(340.0),
        };
        let mut engine = ReplayEngine::new(EngineOutcome::finished(PotentialGrid::uniform([1, 1, 2], 0.0)));

        assert!(engine.run(&job).is_ok());
        assert!(matches!(engine.run(&job), Err(EngineError::Rejected(_))));
        assert_eq!(engine.submitted().len(), 2);
    }
}
