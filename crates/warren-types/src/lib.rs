//! Shared type definitions for the Warren mob simulation.
//!
//! Every crate in the workspace speaks in these types: coordinates on the
//! room grid, the four cardinal directions, room exits, and observer IDs.
//!
//! # Modules
//!
//! - [`geometry`] -- [`Coord`] and [`Direction`], with checked stepping
//! - [`room`] -- [`Room`] and its [`Exits`] flags
//! - [`ids`] -- Type-safe UUID wrappers for observer identifiers

pub mod geometry;
pub mod ids;
pub mod room;

// Re-export all public types at crate root for convenience.
pub use geometry::{Coord, Direction};
pub use ids::ObserverId;
pub use room::{Exits, Room};
