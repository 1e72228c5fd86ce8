/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Planar-averaged potential profiles

use super::average::planar_average;
use super::errors::{PotentialError, Result};
use super::grid::PotentialGrid;
use crate::structure::Cell;
use crate::utils::linspace;
use serde::{Deserialize, Serialize};

/// Planar-averaged potential against the out-of-plane coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialProfile {
    /// Out-of-plane coordinate, uniform on `[0, cell_length]`
    pub z: Vec<f64>,
    /// Planar-averaged potential at each `z`
    pub v: Vec<f64>,
}

/// Average potential on the two vacuum sides of a slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VacuumLevels {
    /// Mean over the leading points (small z)
    pub left: f64,
    /// Mean over the trailing points (large z)
    pub right: f64,
}

impl VacuumLevels {
    /// Potential step across the cell, `right - left`
    pub fn step(&self) -> f64 {
        self.right - self.left
    }
}

impl PotentialProfile {
    /// Average `grid` along `axis` and pair it with coordinates along that
    /// lattice vector of `cell`
    pub fn from_grid(grid: &PotentialGrid, cell: &Cell, axis: usize) -> Result<Self> {
        let cell_length = cell.vector_length(axis)?;
        Self::from_grid_with_length(grid, cell_length, axis)
    }

    /// Same as [`PotentialProfile::from_grid`] with an explicit cell length
    pub fn from_grid_with_length(grid: &PotentialGrid, cell_length: f64, axis: usize) -> Result<Self> {
        let v = planar_average(grid, axis)?.to_vec();
        let z = linspace(0.0, cell_length, v.len());
        Ok(Self { z, v })
    }

    /// Number of profile points
    pub fn len(&self) -> usize {
        self.v.len()
    }

    /// True when the profile has no points
    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    /// Vacuum levels from the first and last `window` points
    pub fn vacuum_levels(&self, window: usize) -> Result<VacuumLevels> {
        if window == 0 {
            return Err(PotentialError::InvalidProfile(
                "vacuum window must hold at least one point".to_string(),
            ));
        }
        if window > self.len() {
            return Err(PotentialError::InvalidProfile(format!(
                "vacuum window of {} points exceeds profile length {}",
                window,
                self.len()
            )));
        }

        let n = window as f64;
        let left = self.v[..window].iter().sum::<f64>() / n;
        let right = self.v[self.len() - window..].iter().sum::<f64>() / n;
        Ok(VacuumLevels { left, right })
    }
}
