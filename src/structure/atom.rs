/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atom representation for slab relaxations

use super::errors::{Result, StructureError};
use super::vector::Vector3D;
use std::fmt;

/// Per-direction motion freedom of an atom during relaxation
///
/// `true` means the optimizer may move the atom along that Cartesian axis.
pub type MotionFlags = [bool; 3];

/// All directions free
pub const FREE: MotionFlags = [true, true, true];

/// All directions frozen
pub const FIXED: MotionFlags = [false, false, false];

/// Represents an atom in the slab
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element symbol (e.g. "Al")
    element: String,
    /// Cartesian position in Angstrom
    position: Vector3D,
    /// Motion freedom handed to the geometry optimizer
    movable: MotionFlags,
}

impl Atom {
    /// Create a new, fully movable atom
    pub fn new(element: &str, position: Vector3D) -> Result<Self> {
        if !is_element_symbol(element) {
            return Err(StructureError::InvalidAtom(format!(
                "'{}' is not an element symbol",
                element
            )));
        }
        if ![position.x, position.y, position.z]
            .iter()
            .all(|c| c.is_finite())
        {
            return Err(StructureError::InvalidAtom(format!(
                "{} has a non-finite position {}",
                element, position
            )));
        }

        Ok(Self {
            element: element.to_string(),
            position,
            movable: FREE,
        })
    }

    /// Create a new atom with explicit motion flags
    pub fn with_motion(element: &str, position: Vector3D, movable: MotionFlags) -> Result<Self> {
        let mut atom = Self::new(element, position)?;
        atom.movable = movable;
        Ok(atom)
    }

    /// Get the element symbol
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Get the atom's position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Get the motion flags
    pub fn movable(&self) -> MotionFlags {
        self.movable
    }

    /// Set the motion flags
    pub fn set_movable(&mut self, movable: MotionFlags) {
        self.movable = movable;
    }

    /// True when the atom may move along at least one axis
    pub fn is_free(&self) -> bool {
        self.movable.iter().any(|&m| m)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.position)
    }
}

/// One upper-case letter followed by at most two lower-case letters
fn is_element_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    let rest: Vec<char> = chars.collect();
    rest.len() <= 2 && rest.iter().all(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_creation() {
        let atom = Atom::new("Al", Vector3D::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(atom.element(), "Al");
        assert_eq!(atom.movable(), FREE);
        assert!(atom.is_free());
    }

    #[test]
    fn test_invalid_symbols() {
        for bad in ["", "al", "AL", "Alum", "1"] {
            assert!(Atom::new(bad, Vector3D::origin()).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_non_finite_position() {
        assert!(Atom::new("Al", Vector3D::new(f64::NAN, 0.0, 0.0)).is_err());
    }

    #[test]
    fn test_fixed_atom() {
        let atom = Atom::with_motion("Al", Vector3D::origin(), FIXED).unwrap();
        assert!(!atom.is_free());
    }
}
