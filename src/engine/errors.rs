/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the engine seam

use std::io;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while driving the external engine or a plot sink
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine finished with a failure status
    #[error("Engine run failed: {0}")]
    RunFailed(String),

    /// The engine reported success but produced no potential
    #[error("Engine run finished without an electrostatic potential")]
    MissingPotential,

    /// The engine refused the job before running it
    #[error("Engine rejected the job: {0}")]
    Rejected(String),

    /// The plot sink could not consume the data
    #[error("Plot sink error: {0}")]
    SinkError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}
