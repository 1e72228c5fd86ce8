/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the relaxation workflow

use thiserror::Error;

/// Result type for workflow operations
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Any failure along the charge → run → average chain
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Input error: {0}")]
    InputError(#[from] crate::input::InputError),

    #[error("Engine error: {0}")]
    EngineError(#[from] crate::engine::EngineError),

    #[error("Potential error: {0}")]
    PotentialError(#[from] crate::potential::PotentialError),
}
