/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # slab-efield
//!
//! Preparation and post-processing for relaxing a metal surface slab under an
//! external electric field with the generalized dipole correction.
//!
//! The DFT engine itself is external. This crate computes the compensating
//! charge that realises a pair of target fields, assembles the engine job,
//! drives the engine through the [`engine::SimulationEngine`] seam and reduces
//! the returned electrostatic potential to a planar-averaged profile.
//!
//! ```
//! use slab_efield::field::total_charge;
//! use slab_efield::structure::Cell;
//!
//! let cell = Cell::orthorhombic(4.0, 4.0, 30.0);
//! let q = total_charge(0.05, -0.05, &cell);
//! assert!((q - 0.4547).abs() < 1e-3);
//! ```

pub mod cli;
pub mod engine;
pub mod field;
pub mod input;
pub mod potential;
pub mod structure;
pub mod utils;
pub mod workflow;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
