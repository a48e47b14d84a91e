//! Tunables for the mob population, read from the `mobs` section of
//! `warren-config.yaml`.
//!
//! Every field has a default, so an absent or partial section is fine. The
//! defaults reproduce the classic behavior: one mob at startup, a dig on
//! one tick in ten, and the stock name fragments.

use serde::Deserialize;

use crate::error::MobError;
use crate::names::{DEFAULT_PREFIXES, DEFAULT_SUFFIXES, NameGenerator};

/// Default odds denominator for choosing Create over Move.
pub const DEFAULT_CREATE_ONE_IN: u32 = 10;

/// Mob population and behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MobConfig {
    /// Mobs spawned before the first tick.
    #[serde(default = "default_initial_count")]
    pub initial_count: u32,

    /// Periodic spawning stops once this many mobs exist.
    #[serde(default = "default_max_population")]
    pub max_population: u32,

    /// Spawn one more mob every this many ticks (0 disables).
    #[serde(default = "default_spawn_every_ticks")]
    pub spawn_every_ticks: u64,

    /// A tick picks Create with probability `1 / create_one_in`.
    #[serde(default = "default_create_one_in")]
    pub create_one_in: u32,

    /// Leading name fragments.
    #[serde(default = "default_name_prefixes")]
    pub name_prefixes: Vec<String>,

    /// Trailing name fragments.
    #[serde(default = "default_name_suffixes")]
    pub name_suffixes: Vec<String>,
}

impl Default for MobConfig {
    fn default() -> Self {
        Self {
            initial_count: default_initial_count(),
            max_population: default_max_population(),
            spawn_every_ticks: default_spawn_every_ticks(),
            create_one_in: default_create_one_in(),
            name_prefixes: default_name_prefixes(),
            name_suffixes: default_name_suffixes(),
        }
    }
}

impl MobConfig {
    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`MobError::InvalidConfig`] if `create_one_in` is zero or
    /// `initial_count` exceeds `max_population`, and [`MobError::Name`] if
    /// a fragment list is empty.
    pub fn validate(&self) -> Result<(), MobError> {
        if self.create_one_in == 0 {
            return Err(MobError::InvalidConfig {
                message: String::from("create_one_in must be at least 1"),
            });
        }
        if self.initial_count > self.max_population {
            return Err(MobError::InvalidConfig {
                message: format!(
                    "initial_count ({}) exceeds max_population ({})",
                    self.initial_count, self.max_population
                ),
            });
        }
        self.name_generator()?;
        Ok(())
    }

    /// Build the name generator described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`MobError::Name`] if a fragment list is empty.
    pub fn name_generator(&self) -> Result<NameGenerator, MobError> {
        Ok(NameGenerator::new(
            self.name_prefixes.clone(),
            self.name_suffixes.clone(),
        )?)
    }

    /// Whether periodic spawning wants a new mob after `tick` given the
    /// current population.
    pub const fn wants_spawn(&self, tick: u64, population: usize) -> bool {
        if tick == 0 || population >= self.max_population as usize {
            return false;
        }
        matches!(tick.checked_rem(self.spawn_every_ticks), Some(0))
    }
}

const fn default_initial_count() -> u32 {
    1
}

const fn default_max_population() -> u32 {
    8
}

const fn default_spawn_every_ticks() -> u64 {
    100
}

const fn default_create_one_in() -> u32 {
    DEFAULT_CREATE_ONE_IN
}

fn default_name_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(|s| (*s).to_owned()).collect()
}

fn default_name_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| (*s).to_owned()).collect()
}
