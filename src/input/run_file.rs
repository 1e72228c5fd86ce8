/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! JSON description of one field-biased slab run

use super::config::KPointMesh;
use super::errors::{InputError, Result};
use crate::field::FieldTargets;
use crate::structure::{Atom, Cell, MotionFlags, SlabStructure, Vector3D, FREE};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One atom as written in a run file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// Element symbol
    pub element: String,
    /// Cartesian position in Angstrom
    pub position: Vector3D,
    /// Motion freedom; all directions free when omitted
    #[serde(default = "default_movable")]
    pub movable: MotionFlags,
}

/// Numerical settings of a run that do not depend on the fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParams {
    /// Plane-wave cutoff in eV
    pub energy_cutoff_ev: f64,
    /// K-point sampling
    pub kpoints: KPointMesh,
    /// Lattice axis normal to the surface
    pub axis: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            energy_cutoff_ev: default_energy_cutoff(),
            kpoints: KPointMesh::default(),
            axis: default_axis(),
        }
    }
}

/// Complete run description
///
/// Both target fields are mandatory: the left field differs between otherwise
/// identical tutorial setups, so no value is assumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFile {
    /// Simulation cell in Angstrom
    pub cell: Cell,
    /// Atoms of the slab
    pub atoms: Vec<AtomRecord>,
    /// Freeze every atom below this z (Angstrom)
    #[serde(default)]
    pub fix_below: Option<f64>,
    /// Target fields in Hartree/(e·Bohr)
    pub fields: FieldTargets,
    /// Plane-wave cutoff in eV
    #[serde(default = "default_energy_cutoff")]
    pub energy_cutoff_ev: f64,
    /// K-point sampling
    #[serde(default)]
    pub kpoints: KPointMesh,
    /// Lattice axis normal to the surface
    #[serde(default = "default_axis")]
    pub axis: usize,
}

fn default_movable() -> MotionFlags {
    FREE
}

fn default_energy_cutoff() -> f64 {
    340.0
}

fn default_axis() -> usize {
    2
}

impl RunFile {
    /// Build the slab described by the run file
    pub fn structure(&self) -> Result<SlabStructure> {
        let mut slab = SlabStructure::new(self.cell);
        for record in &self.atoms {
            slab.add_atom(Atom::with_motion(
                &record.element,
                record.position,
                record.movable,
            )?);
        }
        if let Some(z) = self.fix_below {
            let frozen = slab.fix_atoms_below(z);
            log::debug!("froze {} atoms below z = {} A", frozen, z);
        }
        Ok(slab)
    }

    /// Field-independent run settings
    pub fn params(&self) -> RunParams {
        RunParams {
            energy_cutoff_ev: self.energy_cutoff_ev,
            kpoints: self.kpoints,
            axis: self.axis,
        }
    }

    /// Sanity checks that do not need the engine
    pub fn validate(&self) -> Result<()> {
        if self.axis >= 3 {
            return Err(InputError::invalid(
                "axis",
                format!("expected 0, 1 or 2, got {}", self.axis),
            ));
        }
        if !self.fields.right_field.is_finite() || !self.fields.left_field.is_finite() {
            return Err(InputError::invalid("fields", "target fields must be finite"));
        }
        if self.atoms.is_empty() {
            log::warn!("run file describes a slab without atoms");
        }
        Ok(())
    }
}

/// Read and validate a run file
pub fn load_run_file<P: AsRef<Path>>(path: P) -> Result<RunFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let run: RunFile = serde_json::from_reader(BufReader::new(file))?;
    run.validate()?;
    log::info!(
        "loaded run file {} ({} atoms)",
        path.display(),
        run.atoms.len()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "cell": [[2.864, 0.0, 0.0], [1.432, 2.480, 0.0], [0.0, 0.0, 30.0]],
        "atoms": [
            {"element": "Al", "position": [0.0, 0.0, 10.0]},
            {"element": "Al", "position": [1.432, 0.827, 12.338], "movable": [false, false, true]}
        ],
        "fields": {"right_field": 0.05, "left_field": -0.025}
    }"#;

    #[test]
    fn test_defaults() {
        let run: RunFile = serde_json::from_str(MINIMAL).unwrap();
        assert_eq!(run.energy_cutoff_ev, 340.0);
        assert_eq!(run.kpoints, KPointMesh::default());
        assert_eq!(run.axis, 2);
        assert_eq!(run.fix_below, None);
        assert_eq!(run.atoms[0].movable, FREE);
        assert_eq!(run.atoms[1].movable, [false, false, true]);
    }

    #[test]
    fn test_fields_are_required() {
        let json = r#"{"cell": [[1,0,0],[0,1,0],[0,0,1]], "atoms": [], "fields": {"right_field": 0.05}}"#;
        assert!(serde_json::from_str::<RunFile>(json).is_err());
    }

    #[test]
    fn test_structure_with_fixed_layer() {
        let mut run: RunFile = serde_json::from_str(MINIMAL).unwrap();
        run.fix_below = Some(11.0);
        let slab = run.structure().unwrap();
        assert_eq!(slab.atom_count(), 2);
        assert_eq!(slab.free_atom_count(), 1);
    }

    #[test]
    fn test_invalid_axis() {
        let mut run: RunFile = serde_json::from_str(MINIMAL).unwrap();
        run.axis = 5;
        assert!(run.validate().is_err());
    }
}
