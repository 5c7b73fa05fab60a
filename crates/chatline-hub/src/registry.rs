//! The live set of browser connections.

use std::collections::HashMap;

use chatline_transport::{Connection, ConnectionId};

/// Membership set of browser-role channels eligible for broadcast.
///
/// The registry itself is not synchronized — [`Hub`](crate::Hub) wraps it
/// in a `Mutex` and holds that lock across whole operations, which is how
/// broadcast observes a consistent membership and browser registration
/// gets its snapshot-then-subscribe ordering.
#[derive(Debug)]
pub struct SubscriberRegistry<C: Connection> {
    subscribers: HashMap<ConnectionId, C>,
}

impl<C: Connection> SubscriberRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Registers a browser connection.
    pub fn add(&mut self, conn: C) {
        self.subscribers.insert(conn.id(), conn);
    }

    /// Removes and returns a subscriber, if present.
    pub fn remove(&mut self, id: &ConnectionId) -> Option<C> {
        self.subscribers.remove(id)
    }

    /// Returns the current number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if no browsers are registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Returns the IDs of all current subscribers. Order is arbitrary.
    pub fn ids(&self) -> Vec<ConnectionId> {
        self.subscribers.keys().copied().collect()
    }

    /// Sends `frame` to every subscriber.
    ///
    /// A failed send never aborts delivery to the rest; the IDs that
    /// failed are returned so the caller removes them before the next
    /// broadcast.
    pub async fn broadcast(&self, frame: &[u8]) -> Vec<ConnectionId> {
        let mut failed = Vec::new();
        for (id, conn) in &self.subscribers {
            if let Err(e) = conn.send(frame).await {
                tracing::warn!(%id, error = %e, "broadcast send failed");
                failed.push(*id);
            }
        }
        failed
    }

    /// Removes and returns every subscriber (relay shutdown).
    pub fn drain(&mut self) -> Vec<C> {
        self.subscribers.drain().map(|(_, conn)| conn).collect()
    }
}

impl<C: Connection> Default for SubscriberRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
