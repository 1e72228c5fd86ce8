/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Field-to-charge conversion
//!
//! A slab sitting in a repeated cell sees the field `left_field` below it and
//! `right_field` above it. Gauss' law fixes the sheet charge that produces the
//! jump between the two:
//!
//! ```text
//! total_charge = (right_field - left_field) * area / (4π)
//! ```
//!
//! with fields in Hartree/(e·Bohr) and the in-plane area in Bohr².

use crate::input::ChargeDensitySpec;
use crate::structure::{Cell, SlabStructure};
use crate::utils::constants::FOUR_PI;
use crate::utils::{angstrom_to_bohr, hartree_to_ev};
use serde::{Deserialize, Serialize};

/// Target fields on the two exposed faces of the slab, in Hartree/(e·Bohr)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldTargets {
    /// Field above the slab (vacuum side at large z)
    pub right_field: f64,
    /// Field below the slab (vacuum side at small z)
    pub left_field: f64,
}

impl FieldTargets {
    /// Create a new pair of target fields
    pub fn new(right_field: f64, left_field: f64) -> Self {
        Self {
            right_field,
            left_field,
        }
    }

    /// Field jump across the slab
    pub fn field_jump(&self) -> f64 {
        self.right_field - self.left_field
    }
}

/// In-plane area of an Angstrom cell, in Bohr²
pub fn in_plane_area_bohr(cell: &Cell) -> f64 {
    cell.to_bohr().in_plane_area()
}

/// Total compensating charge for the requested fields
///
/// `cell` is in Angstrom. A degenerate cell (collinear in-plane vectors) has
/// zero area and yields zero charge.
pub fn total_charge(right_field: f64, left_field: f64, cell: &Cell) -> f64 {
    (right_field - left_field) * in_plane_area_bohr(cell) / FOUR_PI
}

/// Engine-facing quantities derived from the target fields and the slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeSetup {
    /// Requested fields
    pub targets: FieldTargets,
    /// In-plane area in Bohr²
    pub area_bohr2: f64,
    /// Compensating charge placed below the slab
    pub total_charge: f64,
    /// Excess electrons asserted on the Hamiltonian (`-total_charge`)
    pub n_excess_electrons: f64,
    /// Residual field below the slab in eV/Bohr, for the dipole correction
    pub z_field_ev: f64,
    /// Position of the charge sheet in Bohr
    pub sheet_z_bohr: f64,
}

impl ChargeSetup {
    /// Derive the charge setup for a slab
    ///
    /// The charge sheet sits at the lowest atom of the slab, or at z = 0 for a
    /// slab without atoms.
    pub fn derive(targets: FieldTargets, slab: &SlabStructure) -> Self {
        let area_bohr2 = in_plane_area_bohr(slab.cell());
        let total_charge = targets.field_jump() * area_bohr2 / FOUR_PI;
        let sheet_z_bohr = slab.bottom_z().map(angstrom_to_bohr).unwrap_or(0.0);

        log::debug!(
            "field jump {:.6} Ha/Bohr over {:.4} Bohr^2 -> charge {:.6} e",
            targets.field_jump(),
            area_bohr2,
            total_charge
        );

        Self {
            targets,
            area_bohr2,
            total_charge,
            n_excess_electrons: -total_charge,
            z_field_ev: hartree_to_ev(targets.left_field),
            sheet_z_bohr,
        }
    }

    /// Initial-guess charge sheet handed to the engine
    pub fn charge_sheet(&self) -> ChargeDensitySpec {
        ChargeDensitySpec {
            charge: self.total_charge,
            z: self.sheet_z_bohr,
        }
    }
}
