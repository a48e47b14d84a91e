//! Error types for the warren-mobs crate.
//!
//! Misuse of the scheduling contract (acting with no mobs, spawning into an
//! empty world) surfaces here as an error instead of a silent no-op. A
//! blocked move or an occupied dig target is not an error; see
//! [`Outcome`](crate::behavior::Outcome).

use warren_world::WorldError;

/// Errors from the name generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// A fragment table was empty, so no name can be assembled.
    #[error("name {which} list is empty")]
    EmptyFragments {
        /// Which table was empty (`prefix` or `suffix`).
        which: &'static str,
    },
}

/// Errors that can occur during mob lifecycle and behavior operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MobError {
    /// A random action was requested while no mob is alive.
    #[error("no mobs to act: spawn one before scheduling actions")]
    NoMobs,

    /// A grid operation failed, or a grid precondition was violated.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// The name generator could not be built.
    #[error("name error: {source}")]
    Name {
        /// The underlying name error.
        #[from]
        source: NameError,
    },

    /// Mob configuration failed validation.
    #[error("invalid mob config: {message}")]
    InvalidConfig {
        /// What was wrong.
        message: String,
    },
}
