//! Error types for the `warren-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type.

use warren_types::{Coord, ObserverId};

/// Errors that can occur during grid or presence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// No room has been carved at the coordinate.
    #[error("no room at {0}")]
    RoomNotFound(Coord),

    /// A room already exists where a new one was to be inserted.
    #[error("room already exists at {0}")]
    DuplicateRoom(Coord),

    /// The grid holds no rooms, so there is nowhere to place anything.
    #[error("world has no rooms")]
    EmptyWorld,

    /// The observer is not registered with the presence registry.
    #[error("unknown observer: {0}")]
    UnknownObserver(ObserverId),
}
