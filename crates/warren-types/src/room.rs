//! Rooms and their directional connectivity flags.

use serde::{Deserialize, Serialize};

use crate::geometry::Direction;

/// Open/closed flags for the four exits of a room.
///
/// The flags are independent; reciprocity between neighboring rooms is the
/// responsibility of whoever opens them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Exits {
    /// Open toward the north.
    pub north: bool,
    /// Open toward the south.
    pub south: bool,
    /// Open toward the east.
    pub east: bool,
    /// Open toward the west.
    pub west: bool,
}

impl Exits {
    /// All four exits closed.
    pub const CLOSED: Self = Self {
        north: false,
        south: false,
        east: false,
        west: false,
    };

    /// Whether the exit toward `direction` is open.
    pub const fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Open the exit toward `direction`. Opening an open exit is a no-op.
    pub const fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = true,
            Direction::South => self.south = true,
            Direction::East => self.east = true,
            Direction::West => self.west = true,
        }
    }

    /// Directions whose exit is open, in [`Direction::ALL`] order.
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.is_open(*dir))
            .collect()
    }

    /// Number of open exits.
    pub fn open_count(&self) -> usize {
        Direction::ALL.iter().filter(|dir| self.is_open(**dir)).count()
    }
}

/// A single grid cell: a text description plus its exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Human-readable description shown to anyone standing here.
    pub description: String,
    /// Which neighbors this room connects to.
    pub exits: Exits,
}

impl Room {
    /// Create a room with every exit closed.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            exits: Exits::CLOSED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_room_is_sealed() {
        let room = Room::new("A damp hollow");
        assert_eq!(room.exits, Exits::CLOSED);
        assert_eq!(room.exits.open_count(), 0);
        assert!(room.exits.open_directions().is_empty());
    }

    #[test]
    fn open_sets_only_the_named_flag() {
        let mut exits = Exits::CLOSED;
        exits.open(Direction::East);
        assert!(exits.is_open(Direction::East));
        assert!(!exits.is_open(Direction::West));
        assert!(!exits.is_open(Direction::North));
        assert!(!exits.is_open(Direction::South));
        assert_eq!(exits.open_directions(), vec![Direction::East]);
    }

    #[test]
    fn open_is_idempotent() {
        let mut exits = Exits::CLOSED;
        exits.open(Direction::North);
        exits.open(Direction::North);
        assert_eq!(exits.open_count(), 1);
    }
}
