/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Job configuration handed to the external DFT engine
//!
//! Every option the engine understands for a field-biased slab run is a named
//! field here; there is no free-form attribute bag.

use super::errors::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monkhorst-Pack k-point grid with a fractional shift of its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KPointMesh {
    /// Number of k-points along each reciprocal vector
    pub mesh: [u32; 3],
    /// Fractional shift of the mesh center
    pub center_shift: [f64; 3],
}

impl Default for KPointMesh {
    fn default() -> Self {
        Self {
            mesh: [4, 4, 1],
            center_shift: [0.5, 0.5, 0.25],
        }
    }
}

/// Charged sheet used as initial guess for the density
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeDensitySpec {
    /// Sheet charge in units of e
    pub charge: f64,
    /// Out-of-plane position in Bohr
    pub z: f64,
}

/// Hamiltonian switches for the generalized dipole correction
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HamiltonianParams {
    /// Net number of electrons added to the neutral cell
    pub n_excess_electrons: f64,
    /// Enable the dipole correction
    pub dipole_correction: bool,
    /// Residual field on the correction side, eV/Bohr
    pub z_field: f64,
}

/// Complete engine job configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobConfig {
    /// Plane-wave cutoff in eV
    pub energy_cutoff_ev: f64,
    /// K-point sampling
    pub kpoints: KPointMesh,
    /// Initial-guess charge sheet, if any
    pub initial_charge: Option<ChargeDensitySpec>,
    /// Hamiltonian parameters
    pub hamiltonian: HamiltonianParams,
}

/// Value of one engine option
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionValue {
    Float(f64),
    Bool(bool),
    Mesh([u32; 3]),
    Shift([f64; 3]),
    Charge(ChargeDensitySpec),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Mesh([a, b, c]) => write!(f, "[{}, {}, {}]", a, b, c),
            OptionValue::Shift([a, b, c]) => write!(f, "[{}, {}, {}]", a, b, c),
            OptionValue::Charge(sheet) => write!(f, "{{charge: {}, z: {}}}", sheet.charge, sheet.z),
        }
    }
}

impl JobConfig {
    /// Default-sampled job with the given cutoff and no charge or field
    pub fn new(energy_cutoff_ev: f64) -> Self {
        Self {
            energy_cutoff_ev,
            kpoints: KPointMesh::default(),
            initial_charge: None,
            hamiltonian: HamiltonianParams::default(),
        }
    }

    /// Check that every option holds a value the engine can accept
    pub fn validate(&self) -> Result<()> {
        if !self.energy_cutoff_ev.is_finite() || self.energy_cutoff_ev <= 0.0 {
            return Err(InputError::invalid(
                "EnCut",
                format!("cutoff must be positive, got {}", self.energy_cutoff_ev),
            ));
        }
        if self.kpoints.mesh.iter().any(|&n| n == 0) {
            return Err(InputError::invalid(
                "kPoints.mesh",
                format!("every direction needs at least one k-point, got {:?}", self.kpoints.mesh),
            ));
        }
        require_finite("kPoints.centerShift", &self.kpoints.center_shift)?;
        if let Some(sheet) = &self.initial_charge {
            require_finite("initialGuess.rho.charge", &[sheet.charge, sheet.z])?;
        }
        require_finite("nExcessElectrons", &[self.hamiltonian.n_excess_electrons])?;
        require_finite("zField", &[self.hamiltonian.z_field])?;
        Ok(())
    }

    /// Field-to-effect table, in the order the options are written to the engine
    pub fn field_effects(&self) -> Vec<(&'static str, OptionValue)> {
        let mut table = vec![
            ("EnCut", OptionValue::Float(self.energy_cutoff_ev)),
            ("kPoints.mesh", OptionValue::Mesh(self.kpoints.mesh)),
            ("kPoints.centerShift", OptionValue::Shift(self.kpoints.center_shift)),
        ];
        if let Some(sheet) = self.initial_charge {
            table.push(("initialGuess.rho.charge", OptionValue::Charge(sheet)));
        }
        table.push((
            "nExcessElectrons",
            OptionValue::Float(self.hamiltonian.n_excess_electrons),
        ));
        table.push((
            "dipoleCorrection",
            OptionValue::Bool(self.hamiltonian.dipole_correction),
        ));
        table.push(("zField", OptionValue::Float(self.hamiltonian.z_field)));
        table
    }
}

fn require_finite(option: &str, values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(InputError::invalid(option, format!("non-finite value in {:?}", values)))
    }
}
