/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Job configuration and run files
//!
//! [`JobConfig`] is the statically declared set of options handed to the
//! engine. [`RunFile`] is the JSON document a user writes to describe one
//! field-biased slab run.

mod config;
pub mod errors;
mod run_file;

pub use config::{ChargeDensitySpec, HamiltonianParams, JobConfig, KPointMesh, OptionValue};
pub use errors::{InputError, Result};
pub use run_file::{load_run_file, AtomRecord, RunFile, RunParams};
