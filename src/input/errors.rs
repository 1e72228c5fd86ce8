/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for job configuration and run files

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or validating a job configuration
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },

    #[error("Invalid atomic structure: {0}")]
    InvalidStructure(#[from] crate::structure::errors::StructureError),
}

impl InputError {
    pub(crate) fn invalid(option: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
