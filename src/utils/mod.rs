/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared across the crate
//!
//! Unit constants, unit conversions and uniform coordinate grids.

pub mod constants;
mod conversions;
mod grid;

pub use conversions::{angstrom_to_bohr, bohr_to_angstrom, ev_to_hartree, hartree_to_ev};
pub use grid::linspace;
