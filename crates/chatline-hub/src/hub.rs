//! The hub: history + registry under one lock discipline.

use chatline_transport::{Connection, ConnectionId};
use tokio::sync::Mutex;

use crate::{HistoryLog, SubscriberRegistry};

/// The relay's shared state, injected into every connection session.
///
/// All cross-session ordering guarantees hang off the registry lock:
///
/// - [`publish`](Self::publish) holds it across "append to history,
///   broadcast to every subscriber", so concurrent writers' frames reach
///   the history and every live browser in the same relative order.
/// - [`register_browser`](Self::register_browser) holds it across
///   "capture history snapshot, send it, add to registry", so no frame
///   published after the snapshot is missed and none arrives twice.
///
/// Subscribers whose send fails are removed inside the same critical
/// section and are absent from the next broadcast.
#[derive(Debug)]
pub struct Hub<C: Connection> {
    history: HistoryLog,
    subscribers: Mutex<SubscriberRegistry<C>>,
}

impl<C: Connection> Hub<C> {
    /// Creates a hub with an empty history and no subscribers.
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
            subscribers: Mutex::new(SubscriberRegistry::new()),
        }
    }

    /// Appends one frame to the history and broadcasts it to every
    /// subscriber, as a single atomic step.
    ///
    /// Unreachable subscribers are dropped from the registry; their
    /// failure never aborts delivery to the others.
    pub async fn publish(&self, frame: &[u8]) {
        let mut subscribers = self.subscribers.lock().await;
        self.history.append(frame).await;

        for id in subscribers.broadcast(frame).await {
            if let Some(conn) = subscribers.remove(&id) {
                let _ = conn.close().await;
                tracing::info!(%id, "dropped unreachable subscriber");
            }
        }
    }

    /// Registers a browser: sends it the full transcript-so-far, then
    /// subscribes it to live broadcasts.
    ///
    /// An empty history sends nothing. If the snapshot send fails the
    /// browser is dropped instead of registered — it could never catch
    /// up.
    pub async fn register_browser(&self, conn: C) {
        let mut subscribers = self.subscribers.lock().await;
        let snapshot = self.history.snapshot().await;

        if !snapshot.is_empty() {
            if let Err(e) = conn.send(&snapshot).await {
                tracing::warn!(
                    id = %conn.id(),
                    error = %e,
                    "snapshot send failed, dropping browser"
                );
                let _ = conn.close().await;
                return;
            }
        }

        tracing::info!(id = %conn.id(), "browser registered");
        subscribers.add(conn);
    }

    /// Removes a subscriber without closing it.
    pub async fn remove(&self, id: &ConnectionId) -> Option<C> {
        self.subscribers.lock().await.remove(id)
    }

    /// Returns the current number of registered browsers.
    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.lock().await.len()
    }

    /// Returns the transcript component.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Closes and drops every subscriber (relay shutdown).
    pub async fn shutdown(&self) {
        let drained = self.subscribers.lock().await.drain();
        for conn in drained {
            let _ = conn.close().await;
        }
        tracing::info!("hub shut down, all subscribers closed");
    }
}
