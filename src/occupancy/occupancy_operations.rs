//! Occupancy map operations
//!
//! Every location that enters the map goes through `cell_index`, which refuses
//! anything outside the declared extents. Out-of-range locations are never
//! clamped or wrapped into a neighbouring cell.

use super::occupancy_data::{CellState, MapExtents, OccupancyMap};
use crate::constants::map::MAX_CELLS;
use crate::error::{PerceptionError, PerceptionResult};
use crate::location::Location;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Validate extents: everything positive and the cell count within limits
pub fn validate_map_extents(extents: &MapExtents) -> PerceptionResult<()> {
    let checks = [
        ("map.x_max", extents.x_max),
        ("map.y_max", extents.y_max),
        ("map.z_max", extents.z_max),
        ("map.cell_size", extents.cell_size),
    ];

    for (field, value) in checks {
        if value <= 0 {
            return Err(PerceptionError::InvalidConfig {
                field: field.to_string(),
                value: value.to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if value > i64::MAX / 2 {
            return Err(PerceptionError::InvalidConfig {
                field: field.to_string(),
                value: value.to_string(),
                reason: "too large to address".to_string(),
            });
        }
    }

    let [nx, ny, nz] = map_dimensions(extents);
    let total = nx
        .checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .filter(|&n| n <= MAX_CELLS);

    if total.is_none() {
        return Err(PerceptionError::InvalidConfig {
            field: "map".to_string(),
            value: format!("{}x{}x{} cells", nx, ny, nz),
            reason: format!("exceeds maximum of {} cells", MAX_CELLS),
        });
    }

    Ok(())
}

/// Cell counts along each axis: ceil(2 * max / cell_size) for X and Y,
/// ceil(max / cell_size) for Z.
pub fn map_dimensions(extents: &MapExtents) -> [usize; 3] {
    let cells_for = |length: i64| -> usize {
        if length <= 0 || extents.cell_size <= 0 {
            0
        } else {
            ((length - 1) / extents.cell_size + 1) as usize
        }
    };

    [
        cells_for(extents.x_max.saturating_mul(2)),
        cells_for(extents.y_max.saturating_mul(2)),
        cells_for(extents.z_max),
    ]
}

/// Create a map with every cell unoccupied
pub fn create_occupancy_map(extents: MapExtents) -> PerceptionResult<OccupancyMap> {
    validate_map_extents(&extents)?;

    let dimensions = map_dimensions(&extents);
    let total = dimensions[0] * dimensions[1] * dimensions[2];

    log::debug!(
        "[create_occupancy_map] {}x{}x{} cells of size {} ({} KB)",
        dimensions[0],
        dimensions[1],
        dimensions[2],
        extents.cell_size,
        total / 1024
    );

    Ok(OccupancyMap {
        extents,
        dimensions,
        cells: vec![CellState::Unoccupied; total],
    })
}

// ============================================================================
// ADDRESSING
// ============================================================================

/// Check whether a location lies inside the map extents
pub fn is_within_extents(extents: &MapExtents, location: Location) -> bool {
    location.x >= -extents.x_max
        && location.x < extents.x_max
        && location.y >= -extents.y_max
        && location.y < extents.y_max
        && location.z >= 0
        && location.z < extents.z_max
}

/// Flat index of the cell containing `location`
pub fn cell_index(map: &OccupancyMap, location: Location) -> PerceptionResult<usize> {
    let extents = &map.extents;
    if !is_within_extents(extents, location) {
        return Err(PerceptionError::LocationOutOfBounds {
            location: (location.x, location.y, location.z),
            extents: (extents.x_max, extents.y_max, extents.z_max),
        });
    }

    // Shifted operands are non-negative so division truncates correctly
    let x_index = ((location.x + extents.x_max) / extents.cell_size) as usize;
    let y_index = ((location.y + extents.y_max) / extents.cell_size) as usize;
    let z_index = (location.z / extents.cell_size) as usize;

    let [nx, ny, _] = map.dimensions;
    Ok((z_index * ny + y_index) * nx + x_index)
}

/// Location of the minimum corner of the cell at `index`
pub fn cell_origin(map: &OccupancyMap, index: usize) -> Option<Location> {
    if index >= map.cells.len() {
        return None;
    }

    let [nx, ny, _] = map.dimensions;
    let x_index = (index % nx) as i64;
    let y_index = ((index / nx) % ny) as i64;
    let z_index = (index / (nx * ny)) as i64;
    let size = map.extents.cell_size;

    Some(Location {
        x: x_index * size - map.extents.x_max,
        y: y_index * size - map.extents.y_max,
        z: z_index * size,
    })
}

/// Read the cell containing `location`
pub fn cell(map: &OccupancyMap, location: Location) -> PerceptionResult<&CellState> {
    let index = cell_index(map, location)?;
    Ok(&map.cells[index])
}

/// Mutable handle to the cell containing `location`
pub fn cell_mut(map: &mut OccupancyMap, location: Location) -> PerceptionResult<&mut CellState> {
    let index = cell_index(map, location)?;
    Ok(&mut map.cells[index])
}

/// Overwrite the cell containing `location`
pub fn set_cell(map: &mut OccupancyMap, location: Location, state: CellState) -> PerceptionResult<()> {
    *cell_mut(map, location)? = state;
    Ok(())
}

/// Overwrite a cell by flat index, skipping the extents check.
///
/// Only for indices previously returned by `cell_index` on a map with the
/// same extents; the sampler computes indices on worker threads and writes
/// them here after the join. Panics if `index` is past the end of the map.
pub fn set_cell_by_index(map: &mut OccupancyMap, index: usize, state: CellState) {
    map.cells[index] = state;
}

// ============================================================================
// WHOLE-MAP
// ============================================================================

/// Reset every cell to unoccupied so the map can be reused for a new frame
pub fn clear_occupancy_map(map: &mut OccupancyMap) {
    map.cells.fill(CellState::Unoccupied);
}

/// Number of occupied cells
pub fn occupied_count(map: &OccupancyMap) -> usize {
    map.cells
        .iter()
        .filter(|&&state| state == CellState::Occupied)
        .count()
}

/// Minimum corners of all occupied cells, in storage order
pub fn occupied_locations(map: &OccupancyMap) -> Vec<Location> {
    map.cells
        .iter()
        .enumerate()
        .filter(|(_, state)| **state == CellState::Occupied)
        .filter_map(|(index, _)| cell_origin(map, index))
        .collect()
}
