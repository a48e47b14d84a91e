//! The mob factory: owns every live mob and schedules their actions.
//!
//! Mobs live in a dense arena in spawn order and are addressed by
//! [`MobIndex`]. The factory carries its own injected RNG, so a factory
//! built from a seeded generator replays the same spawns and actions
//! against the same world.
//!
//! One [`MobFactory::random_action`] call is one tick: a uniformly chosen
//! mob performs one behavior. Create is picked with probability
//! `1 / create_one_in` (one in ten by default), otherwise Move.

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, info};
use warren_types::Coord;
use warren_world::Observer;

use crate::behavior::{self, Behavior, BehaviorContext, Outcome};
use crate::config::{DEFAULT_CREATE_ONE_IN, MobConfig};
use crate::error::MobError;
use crate::mob::{Mob, MobIndex};
use crate::names::NameGenerator;

/// Record of one scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    /// Which mob acted.
    pub mob: MobIndex,
    /// Which behavior was selected.
    pub behavior: Behavior,
    /// What came of it.
    pub outcome: Outcome,
}

/// Owner and scheduler of all mobs.
#[derive(Debug)]
pub struct MobFactory<R> {
    /// Live mobs in spawn order.
    mobs: Vec<Mob>,
    /// Name source for new spawns.
    names: NameGenerator,
    /// Create is chosen when a draw in `0..create_one_in` hits zero.
    create_one_in: u32,
    /// Injected randomness for placement, naming and scheduling.
    rng: R,
}

impl<R: Rng> MobFactory<R> {
    /// Create an empty factory with the default create odds.
    pub const fn new(names: NameGenerator, rng: R) -> Self {
        Self {
            mobs: Vec::new(),
            names,
            create_one_in: DEFAULT_CREATE_ONE_IN,
            rng,
        }
    }

    /// Create an empty factory from a validated [`MobConfig`].
    ///
    /// No mobs are spawned here; the caller spawns `initial_count` against
    /// its world.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error.
    pub fn from_config(config: &MobConfig, rng: R) -> Result<Self, MobError> {
        config.validate()?;
        Ok(Self {
            mobs: Vec::new(),
            names: config.name_generator()?,
            create_one_in: config.create_one_in,
            rng,
        })
    }

    /// Place a freshly named mob in a random existing room and announce it
    /// there.
    ///
    /// # Errors
    ///
    /// Returns [`MobError::World`] wrapping
    /// [`WorldError::EmptyWorld`](warren_world::WorldError::EmptyWorld) if
    /// there is no room to spawn into.
    pub fn spawn(&mut self, ctx: &mut BehaviorContext<'_>) -> Result<MobIndex, MobError> {
        let (at, description) = ctx.grid.random_location(&mut self.rng)?;
        let name = self.names.generate(&mut self.rng);

        ctx.events.event(at, &format!("{name} enters the world\n"));

        let index = MobIndex(self.mobs.len());
        info!(mob = %index, name = %name, at = %at, room = %description, "Mob spawned");
        self.mobs.push(Mob::new(name, at));
        Ok(index)
    }

    /// Run one tick: pick a mob, pick a behavior, perform it.
    ///
    /// # Errors
    ///
    /// Returns [`MobError::NoMobs`] if called before any spawn, or
    /// [`MobError::World`] if the acting mob's room has gone missing.
    pub fn random_action(
        &mut self,
        ctx: &mut BehaviorContext<'_>,
    ) -> Result<ActionReport, MobError> {
        if self.mobs.is_empty() {
            return Err(MobError::NoMobs);
        }
        let idx = self.rng.random_range(0..self.mobs.len());
        let behavior = if self.rng.random_range(0..self.create_one_in) == 0 {
            Behavior::Create
        } else {
            Behavior::Move
        };

        let Some(mob) = self.mobs.get_mut(idx) else {
            return Err(MobError::NoMobs);
        };
        let outcome = behavior::perform(behavior, mob, &mut self.rng, ctx)?;

        debug!(mob = %MobIndex(idx), ?behavior, ?outcome, "Mob acted");
        Ok(ActionReport {
            mob: MobIndex(idx),
            behavior,
            outcome,
        })
    }

    /// Send `"  <prefix><Name>\n"` to `observer` for each mob at `at`, in
    /// spawn order. Returns how many lines were sent.
    pub fn show_names_at(&self, observer: &mut dyn Observer, at: Coord, prefix: &str) -> usize {
        let mut sent: usize = 0;
        for mob in self.mobs.iter().filter(|m| m.is_at(at)) {
            observer.send(&format!("  {prefix}{}\n", mob.name()));
            sent = sent.saturating_add(1);
        }
        sent
    }
}

impl<R> MobFactory<R> {
    /// Number of live mobs.
    pub const fn number_of_mobs(&self) -> usize {
        self.mobs.len()
    }

    /// Look up a mob by arena index.
    pub fn mob(&self, index: MobIndex) -> Option<&Mob> {
        self.mobs.get(index.0)
    }

    /// Iterate over all mobs in spawn order.
    pub fn mobs(&self) -> impl Iterator<Item = (MobIndex, &Mob)> {
        self.mobs.iter().enumerate().map(|(i, m)| (MobIndex(i), m))
    }

    /// Names of the mobs at `at`, in spawn order.
    pub fn names_at(&self, at: Coord) -> Vec<&str> {
        self.mobs
            .iter()
            .filter(|m| m.is_at(at))
            .map(Mob::name)
            .collect()
    }

    /// Every coordinate holding at least one mob.
    pub fn occupied_rooms(&self) -> BTreeSet<Coord> {
        self.mobs.iter().map(Mob::position).collect()
    }
}
