//! The mob record.
//!
//! A [`Mob`] is plain data: a name fixed at spawn and a grid position. It
//! holds no reference to the world; behaviors receive the grid and the
//! broadcaster through a [`BehaviorContext`](crate::behavior::BehaviorContext).

use warren_types::Coord;

/// Index of a mob in its factory's arena.
///
/// Mobs are never removed, so an index stays valid for the factory's
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MobIndex(pub usize);

impl core::fmt::Display for MobIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A roaming non-player entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mob {
    /// Display name, immutable after creation.
    name: String,
    /// Room the mob currently stands in.
    position: Coord,
}

impl Mob {
    /// Create a mob at `position`. The caller guarantees a room exists there.
    pub const fn new(name: String, position: Coord) -> Self {
        Self { name, position }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current position.
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Whether the mob stands at `at`.
    pub fn is_at(&self, at: Coord) -> bool {
        self.position == at
    }

    pub(crate) const fn set_position(&mut self, at: Coord) {
        self.position = at;
    }
}
