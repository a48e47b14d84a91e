//! Mobs for the Warren simulation: naming, spawning, wandering and
//! cell carving.
//!
//! Mobs are autonomous inhabitants of the room grid. Each tick one mob,
//! picked uniformly, either walks through an open exit or digs a brand new
//! cell beside its room and steps into it. Every change is announced to the
//! rooms involved through an [`EventBroadcaster`](warren_world::EventBroadcaster).
//!
//! # Modules
//!
//! - [`names`] -- [`NameGenerator`]: prefix + suffix fragments, capitalized.
//! - [`mob`] -- The [`Mob`] record and its arena index.
//! - [`behavior`] -- Move and Create, and the context they run in.
//! - [`factory`] -- [`MobFactory`]: owns mobs, spawns them, schedules ticks.
//! - [`config`] -- [`MobConfig`] read from the `mobs` config section.
//! - [`error`] -- Error types for naming and mob operations.

pub mod behavior;
pub mod config;
pub mod error;
pub mod factory;
pub mod mob;
pub mod names;

pub use behavior::{Behavior, BehaviorContext, BlockReason, Outcome};
pub use config::MobConfig;
pub use error::{MobError, NameError};
pub use factory::{ActionReport, MobFactory};
pub use mob::{Mob, MobIndex};
pub use names::NameGenerator;
