//! Room grid and event broadcasting for the Warren mob simulation.
//!
//! This crate models the physical world mobs wander through: a 2-D grid of
//! rooms with four directional exits each, and the registry of observers
//! that hear what happens in a room.
//!
//! # Modules
//!
//! - [`grid`] -- The [`WorldGrid`] trait: lookup, insertion, exit opening.
//! - [`cell_map`] -- [`CellMap`], the in-memory grid, plus consistency
//!   queries (reciprocal exits, connectivity).
//! - [`presence`] -- [`EventBroadcaster`] and [`Observer`] traits and the
//!   [`Presence`] observer registry.
//! - [`starting_world`] -- The single-room seed map.
//! - [`error`] -- Error types for grid and presence operations.

pub mod cell_map;
pub mod error;
pub mod grid;
pub mod presence;
pub mod starting_world;

// Re-export primary types at crate root.
pub use cell_map::CellMap;
pub use error::WorldError;
pub use grid::WorldGrid;
pub use presence::{EventBroadcaster, Observer, Presence};
pub use starting_world::{DEFAULT_ORIGIN_DESCRIPTION, create_starting_world};
