/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Potential post-processing
//!
//! The engine hands back the electrostatic potential on a real-space grid.
//! This module reduces it to a planar-averaged profile along the surface
//! normal, ready for plotting or for reading off vacuum levels.

mod average;
pub mod errors;
mod grid;
mod profile;

pub use average::{planar_average, PlanarAverages};
pub use errors::{PotentialError, Result};
pub use grid::PotentialGrid;
pub use profile::{PotentialProfile, VacuumLevels};
