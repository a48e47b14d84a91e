//! Seed map for a fresh simulation.
//!
//! A new world is a single sealed room at the origin. Everything else is
//! carved by mobs as they wander.

use warren_types::Coord;

use crate::cell_map::CellMap;
use crate::error::WorldError;
use crate::grid::WorldGrid;

/// Description used for the origin room when none is configured.
pub const DEFAULT_ORIGIN_DESCRIPTION: &str = "A bare stone chamber";

/// Create the starting grid: one room at [`Coord::ORIGIN`] with every exit
/// closed.
///
/// # Errors
///
/// Returns [`WorldError::DuplicateRoom`] only if the grid construction
/// itself is broken; a fresh map always accepts the origin.
pub fn create_starting_world(origin_description: &str) -> Result<CellMap, WorldError> {
    let mut map = CellMap::new();
    map.add_at(Coord::ORIGIN, origin_description.to_owned())?;
    Ok(map)
}
