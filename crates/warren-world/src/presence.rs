//! Who is standing where, and how text reaches them.
//!
//! [`Presence`] is the per-room observer registry. Each registered observer
//! gets an unbounded channel; [`EventBroadcaster::event`] pushes a line into
//! the channel of every observer standing at the given coordinate and
//! nobody else. Observers whose receiving half has been dropped are pruned
//! on the next broadcast that would have reached them.
//!
//! Sends never block: the tick loop is never held up by a slow reader.

use std::collections::BTreeMap;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};
use warren_types::{Coord, ObserverId};

use crate::error::WorldError;

/// Delivers a message to every observer present at a coordinate.
pub trait EventBroadcaster {
    /// Broadcast `message` at `at`. Reaching zero observers is normal.
    fn event(&mut self, at: Coord, message: &str);
}

/// A single viewer that can be sent lines of text directly.
pub trait Observer {
    /// Deliver one line to this viewer.
    fn send(&mut self, line: &str);
}

impl Observer for String {
    fn send(&mut self, line: &str) {
        self.push_str(line);
    }
}

impl Observer for Vec<String> {
    fn send(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

impl Observer for UnboundedSender<String> {
    fn send(&mut self, line: &str) {
        if Self::send(self, line.to_owned()).is_err() {
            warn!("Observer channel closed, line dropped");
        }
    }
}

/// Records every broadcast in order, regardless of who is listening.
impl EventBroadcaster for Vec<(Coord, String)> {
    fn event(&mut self, at: Coord, message: &str) {
        self.push((at, message.to_owned()));
    }
}

/// A registered observer: where it stands and where its lines go.
#[derive(Debug)]
struct Watcher {
    /// Current position.
    at: Coord,
    /// Sending half of the observer's inbox.
    outbox: UnboundedSender<String>,
}

/// Registry of observers and their positions.
#[derive(Debug, Default)]
pub struct Presence {
    /// Registered observers keyed by ID.
    watchers: BTreeMap<ObserverId, Watcher>,
}

impl Presence {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            watchers: BTreeMap::new(),
        }
    }

    /// Register a new observer at `at` and return its ID together with the
    /// receiving half of its inbox.
    pub fn join(&mut self, at: Coord) -> (ObserverId, UnboundedReceiver<String>) {
        let (outbox, inbox) = mpsc::unbounded_channel();
        let id = ObserverId::new();
        self.watchers.insert(id, Watcher { at, outbox });
        debug!(observer = %id, at = %at, "Observer joined");
        (id, inbox)
    }

    /// Move an observer to a new coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownObserver`] if `id` is not registered.
    pub fn relocate(&mut self, id: ObserverId, at: Coord) -> Result<(), WorldError> {
        let watcher = self
            .watchers
            .get_mut(&id)
            .ok_or(WorldError::UnknownObserver(id))?;
        watcher.at = at;
        Ok(())
    }

    /// Remove an observer. Its inbox is closed once any buffered lines
    /// have been read.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownObserver`] if `id` is not registered.
    pub fn leave(&mut self, id: ObserverId) -> Result<(), WorldError> {
        self.watchers
            .remove(&id)
            .map(|_| ())
            .ok_or(WorldError::UnknownObserver(id))
    }

    /// Current position of an observer.
    pub fn location_of(&self, id: ObserverId) -> Option<Coord> {
        self.watchers.get(&id).map(|w| w.at)
    }

    /// Observers currently standing at `at`.
    pub fn observers_at(&self, at: Coord) -> Vec<ObserverId> {
        self.watchers
            .iter()
            .filter(|(_, w)| w.at == at)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    /// Whether no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }
}

impl EventBroadcaster for Presence {
    fn event(&mut self, at: Coord, message: &str) {
        let mut closed = Vec::new();
        for (id, watcher) in &self.watchers {
            if watcher.at == at && watcher.outbox.send(message.to_owned()).is_err() {
                closed.push(*id);
            }
        }
        for id in closed {
            self.watchers.remove(&id);
            warn!(observer = %id, at = %at, "Observer inbox closed, pruned");
        }
    }
}
