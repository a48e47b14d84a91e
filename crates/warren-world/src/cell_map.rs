//! In-memory room grid: coordinates as keys, rooms as values.
//!
//! [`CellMap`] is the concrete [`WorldGrid`] used by the engine and by
//! tests. Rooms live in a `BTreeMap<Coord, Room>`, so iteration and random
//! selection are deterministic for a given RNG state.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rand::{Rng, RngCore};
use tracing::debug;
use warren_types::{Coord, Direction, Room};

use crate::error::WorldError;
use crate::grid::WorldGrid;

/// The room grid.
#[derive(Debug, Clone, Default)]
pub struct CellMap {
    /// All rooms indexed by their coordinate.
    rooms: BTreeMap<Coord, Room>,
}

impl CellMap {
    /// Create an empty grid.
    pub const fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
        }
    }

    /// Iterate over all rooms in coordinate order.
    pub fn rooms(&self) -> impl Iterator<Item = (&Coord, &Room)> {
        self.rooms.iter()
    }

    /// Return all room coordinates in coordinate order.
    pub fn coords(&self) -> Vec<Coord> {
        self.rooms.keys().copied().collect()
    }

    /// Coordinates reachable in one step through an open exit of `at`
    /// that actually hold a room.
    pub fn neighbors(&self, at: Coord) -> Vec<(Direction, Coord)> {
        let Some(room) = self.rooms.get(&at) else {
            return Vec::new();
        };
        room.exits
            .open_directions()
            .into_iter()
            .filter_map(|dir| at.step(dir).map(|next| (dir, next)))
            .filter(|(_, next)| self.rooms.contains_key(next))
            .collect()
    }

    /// Every open exit that is not matched by an open exit back, or that
    /// points at a coordinate with no room.
    ///
    /// An empty result means the map is fully reciprocal.
    pub fn unreciprocated_exits(&self) -> Vec<(Coord, Direction)> {
        let mut broken = Vec::new();
        for (&at, room) in &self.rooms {
            for dir in room.exits.open_directions() {
                let reciprocated = at
                    .step(dir)
                    .and_then(|next| self.rooms.get(&next))
                    .is_some_and(|next| next.exits.is_open(dir.opposite()));
                if !reciprocated {
                    broken.push((at, dir));
                }
            }
        }
        broken
    }

    /// Whether every room is reachable from every other through open exits.
    ///
    /// An empty grid counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.rooms.keys().next() else {
            return true;
        };

        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for (_, neighbor) in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited.len() == self.rooms.len()
    }
}

impl WorldGrid for CellMap {
    fn random_location(&self, rng: &mut dyn RngCore) -> Result<(Coord, String), WorldError> {
        if self.rooms.is_empty() {
            return Err(WorldError::EmptyWorld);
        }
        let idx = rng.random_range(0..self.rooms.len());
        self.rooms
            .iter()
            .nth(idx)
            .map(|(at, room)| (*at, room.description.clone()))
            .ok_or(WorldError::EmptyWorld)
    }

    fn get_at(&self, at: Coord) -> Result<&Room, WorldError> {
        self.rooms.get(&at).ok_or(WorldError::RoomNotFound(at))
    }

    fn find_at(&self, at: Coord) -> Option<&Room> {
        self.rooms.get(&at)
    }

    fn add_at(&mut self, at: Coord, description: String) -> Result<(), WorldError> {
        if self.rooms.contains_key(&at) {
            return Err(WorldError::DuplicateRoom(at));
        }
        debug!(at = %at, description = %description, "Room added");
        self.rooms.insert(at, Room::new(description));
        Ok(())
    }

    fn open(&mut self, at: Coord, direction: Direction) -> Result<(), WorldError> {
        let room = self.rooms.get_mut(&at).ok_or(WorldError::RoomNotFound(at))?;
        room.exits.open(direction);
        Ok(())
    }

    fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
