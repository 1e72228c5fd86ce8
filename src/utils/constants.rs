/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants used when preparing field-biased slab runs
//!
//! Fixed conversion factors with the precision used throughout the field and
//! charge bookkeeping.

use std::f64::consts::PI;

/// Bohr radii per Angstrom
pub const ANGSTROM_TO_BOHR: f64 = 1.8897;

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 1.0 / ANGSTROM_TO_BOHR;

/// Hartree energy in eV
pub const HARTREE_TO_EV: f64 = 27.2114;

/// Conversion from eV to Hartree
pub const EV_TO_HARTREE: f64 = 1.0 / HARTREE_TO_EV;

/// Gaussian-units prefactor relating a field jump to a sheet charge density
pub const FOUR_PI: f64 = 4.0 * PI;
