//! The [`WorldGrid`] contract the mob subsystem is written against.
//!
//! The grid owns room descriptions keyed by coordinate and the per-room
//! exit flags. It does not enforce exit reciprocity; callers that open a
//! connection are expected to open both sides before announcing it.

use rand::RngCore;
use warren_types::{Coord, Direction, Room};

use crate::error::WorldError;

/// Storage and connectivity operations over the 2-D room map.
pub trait WorldGrid {
    /// Pick an existing room at random and return its coordinate and
    /// description.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EmptyWorld`] if the grid holds no rooms.
    fn random_location(&self, rng: &mut dyn RngCore) -> Result<(Coord, String), WorldError>;

    /// Look up the room at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] if nothing has been carved there.
    fn get_at(&self, at: Coord) -> Result<&Room, WorldError>;

    /// Existence check that also yields the room when present.
    fn find_at(&self, at: Coord) -> Option<&Room>;

    /// Insert a new room with every exit closed.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateRoom`] if a room already exists at
    /// `at`. Existing rooms are never overwritten.
    fn add_at(&mut self, at: Coord, description: String) -> Result<(), WorldError>;

    /// Open the exit of the room at `at` toward `direction`. Opening an
    /// already open exit is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::RoomNotFound`] if there is no room at `at`.
    fn open(&mut self, at: Coord, direction: Direction) -> Result<(), WorldError>;

    /// Number of rooms currently on the grid.
    fn room_count(&self) -> usize;

    /// Whether a room exists at `at`.
    fn contains(&self, at: Coord) -> bool {
        self.find_at(at).is_some()
    }
}
