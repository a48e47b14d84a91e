//! The two things a mob can do on its tick: move, or carve a new cell.
//!
//! Each behavior is a single-step decision made fresh from the mob's
//! current position and the grid's connectivity there. The direction is
//! drawn uniformly from all four, open or not; a closed or occupied choice
//! is a silent no-op tick. Nothing is broadcast unless the world actually
//! changed.
//!
//! The `execute_*` functions take the direction explicitly and are fully
//! deterministic; [`perform`] draws the direction and dispatches.
//!
//! Broadcast text:
//!
//! | Event             | Where         | Text                                  |
//! |-------------------|---------------|---------------------------------------|
//! | move, departure   | old room      | `<Name> leaves <dir>`                 |
//! | move, arrival     | new room      | `<Name> enters from the <opposite>`   |
//! | create            | old room      | `<Name> creates a cell to the <dir>`  |
//! | create, departure | old room      | `<Name> leaves <dir>`                 |

use rand::Rng;
use tracing::{debug, info};
use warren_types::{Coord, Direction};
use warren_world::{EventBroadcaster, WorldGrid};

use crate::error::MobError;
use crate::mob::Mob;

/// The world a behavior acts on, passed in for the duration of one call.
pub struct BehaviorContext<'a> {
    /// Room storage and connectivity.
    pub grid: &'a mut dyn WorldGrid,
    /// Where room events are delivered.
    pub events: &'a mut dyn EventBroadcaster,
}

impl<'a> BehaviorContext<'a> {
    /// Bundle a grid and a broadcaster.
    pub const fn new(grid: &'a mut dyn WorldGrid, events: &'a mut dyn EventBroadcaster) -> Self {
        Self { grid, events }
    }
}

/// Which behavior a tick selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Walk through an open exit into an existing room.
    Move,
    /// Dig a new room next to the current one and step into it.
    Create,
}

/// Why a behavior did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// The exit in the chosen direction is closed.
    Closed,
    /// The exit is open but no room exists on the other side.
    MissingRoom,
    /// A room already exists where a new one would be dug.
    Occupied,
    /// The step would leave the representable grid.
    EdgeOfWorld,
}

/// What a behavior did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mob walked into an existing room.
    Moved {
        /// Room left.
        from: Coord,
        /// Room entered.
        to: Coord,
        /// Direction walked.
        direction: Direction,
    },
    /// The mob dug a new room and stepped into it.
    Created {
        /// Room dug from.
        from: Coord,
        /// The new room.
        to: Coord,
        /// Direction dug.
        direction: Direction,
    },
    /// Nothing happened this tick.
    Blocked {
        /// Direction that was tried.
        direction: Direction,
        /// Why it failed.
        reason: BlockReason,
    },
}

impl Outcome {
    /// Whether the world or the mob changed.
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Blocked { .. })
    }
}

/// Draw one of the four directions uniformly.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    match rng.random_range(0..4_u8) {
        0 => Direction::North,
        1 => Direction::South,
        2 => Direction::East,
        _ => Direction::West,
    }
}

/// Draw a direction and run `behavior` for `mob`.
pub fn perform<R: Rng + ?Sized>(
    behavior: Behavior,
    mob: &mut Mob,
    rng: &mut R,
    ctx: &mut BehaviorContext<'_>,
) -> Result<Outcome, MobError> {
    let direction = random_direction(rng);
    match behavior {
        Behavior::Move => execute_move(mob, direction, ctx),
        Behavior::Create => execute_create(mob, direction, ctx),
    }
}

/// Try to walk `mob` one room toward `direction`.
///
/// Succeeds only if the current room's exit toward `direction` is open and
/// a room exists on the other side.
///
/// # Errors
///
/// Returns [`MobError::World`] if the mob's own room is missing, which
/// means the mob-position invariant was already broken.
pub fn execute_move(
    mob: &mut Mob,
    direction: Direction,
    ctx: &mut BehaviorContext<'_>,
) -> Result<Outcome, MobError> {
    let from = mob.position();
    let open = ctx.grid.get_at(from)?.exits.is_open(direction);

    let blocked = |reason| Ok(Outcome::Blocked { direction, reason });
    if !open {
        return blocked(BlockReason::Closed);
    }
    let Some(to) = from.step(direction) else {
        return blocked(BlockReason::EdgeOfWorld);
    };
    if !ctx.grid.contains(to) {
        return blocked(BlockReason::MissingRoom);
    }

    ctx.events
        .event(from, &format!("{} leaves {direction}\n", mob.name()));
    mob.set_position(to);
    ctx.events.event(
        to,
        &format!("{} enters from the {}\n", mob.name(), direction.opposite()),
    );

    debug!(mob = mob.name(), from = %from, to = %to, "Mob moved");
    Ok(Outcome::Moved {
        from,
        to,
        direction,
    })
}

/// Try to dig a new room next to `mob` toward `direction` and move into it.
///
/// Succeeds only if nothing exists at the target. The new room, the exit
/// out of the current room and the exit back are all in place before the
/// first broadcast. No arrival message is sent in the new room.
///
/// # Errors
///
/// Returns [`MobError::World`] if the mob's own room is missing; in that
/// case the grid is left untouched.
pub fn execute_create(
    mob: &mut Mob,
    direction: Direction,
    ctx: &mut BehaviorContext<'_>,
) -> Result<Outcome, MobError> {
    let from = mob.position();
    ctx.grid.get_at(from)?;

    let blocked = |reason| Ok(Outcome::Blocked { direction, reason });
    let Some(to) = from.step(direction) else {
        return blocked(BlockReason::EdgeOfWorld);
    };
    if ctx.grid.contains(to) {
        return blocked(BlockReason::Occupied);
    }

    ctx.grid
        .add_at(to, format!("A small cell (created by {})", mob.name()))?;
    ctx.grid.open(from, direction)?;
    ctx.grid.open(to, direction.opposite())?;

    ctx.events.event(
        from,
        &format!("{} creates a cell to the {direction}\n", mob.name()),
    );
    ctx.events
        .event(from, &format!("{} leaves {direction}\n", mob.name()));
    mob.set_position(to);

    info!(mob = mob.name(), from = %from, to = %to, "Mob carved a cell");
    Ok(Outcome::Created {
        from,
        to,
        direction,
    })
}
