/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the structure module

/// Error types for the structure module
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    #[error("Invalid lattice axis: {0} (expected 0, 1 or 2)")]
    InvalidAxis(usize),

    #[error("Invalid atom: {0}")]
    InvalidAtom(String),
}

/// Result type for structure operations
pub type Result<T> = std::result::Result<T, StructureError>;
