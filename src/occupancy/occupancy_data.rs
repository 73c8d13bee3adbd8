//! Occupancy map data structures
//!
//! Storage only. Construction and addressing live in occupancy_operations.rs;
//! the `Index` impls below are the panicking form of that addressing.

use crate::constants::map;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;
use std::ops::{Index, IndexMut};

/// State of one cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Unoccupied = 0,
    Occupied = 1,
}

// Dense storage relies on one byte per cell
const_assert_eq!(std::mem::size_of::<CellState>(), 1);

/// Extents covered by a map: X in [-x_max, x_max), Y in [-y_max, y_max),
/// Z in [0, z_max), split into cubes of edge `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapExtents {
    pub x_max: i64,
    pub y_max: i64,
    pub z_max: i64,
    pub cell_size: i64,
}

impl Default for MapExtents {
    fn default() -> Self {
        Self {
            x_max: map::X_MAX,
            y_max: map::Y_MAX,
            z_max: map::Z_MAX,
            cell_size: map::CELL_SIZE,
        }
    }
}

/// Dense occupancy grid, exclusively owning its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMap {
    pub(crate) extents: MapExtents,

    /// Cell counts along X, Y and Z
    pub(crate) dimensions: [usize; 3],

    /// Flat cell array, X varying fastest then Y then Z
    pub(crate) cells: Vec<CellState>,
}

impl OccupancyMap {
    pub fn extents(&self) -> &MapExtents {
        &self.extents
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl Index<Location> for OccupancyMap {
    type Output = CellState;

    /// Panics if `location` is outside the map extents.
    fn index(&self, location: Location) -> &CellState {
        match super::occupancy_operations::cell(self, location) {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<Location> for OccupancyMap {
    /// Panics if `location` is outside the map extents.
    fn index_mut(&mut self, location: Location) -> &mut CellState {
        match super::occupancy_operations::cell_mut(self, location) {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }
}
