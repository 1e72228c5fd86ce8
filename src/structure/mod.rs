/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Slab geometry
//!
//! Lattice cells, atoms with their motion-freedom flags, and the slab that
//! ties them together. Slabs are built elsewhere; this module only holds them.

mod atom;
mod cell;
pub mod errors;
mod slab;
mod vector;

pub use atom::{Atom, MotionFlags, FIXED, FREE};
pub use cell::Cell;
pub use errors::{Result, StructureError};
pub use slab::SlabStructure;
pub use vector::Vector3D;
