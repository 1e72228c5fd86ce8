/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Field-to-charge converter
//!
//! Turns a pair of target fields into the compensating charge, the excess
//! electron count and the residual field used by the generalized dipole
//! correction.

mod charge;

pub use charge::{in_plane_area_bohr, total_charge, ChargeSetup, FieldTargets};
