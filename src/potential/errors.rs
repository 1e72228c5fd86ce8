/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for potential post-processing

use thiserror::Error;

/// Result type for potential post-processing
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential-related operations
#[derive(Error, Debug)]
pub enum PotentialError {
    /// Averaging axis outside the three grid axes
    #[error("Invalid averaging axis {0} for a 3D potential")]
    InvalidAxis(usize),

    /// Flat data does not fill the declared grid shape
    #[error("Potential data has {actual} values but shape {shape:?} needs {expected}")]
    ShapeMismatch {
        shape: [usize; 3],
        expected: usize,
        actual: usize,
    },

    /// Declared shape holds more samples than can be addressed
    #[error("Potential grid shape {0:?} is too large")]
    GridTooLarge([usize; 3]),

    /// One of the in-plane extents is zero, so there is nothing to average
    #[error("Potential grid {0:?} has an empty in-plane slice")]
    EmptySlice([usize; 3]),

    /// Profile too short for the requested operation
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Propagation of error from structure module
    #[error("Structure error: {0}")]
    StructureError(#[from] crate::structure::errors::StructureError),
}
