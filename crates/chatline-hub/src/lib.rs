//! Shared mutable state of the relay.
//!
//! The relay has exactly two pieces of state shared between connection
//! tasks, each encapsulated with its own exclusive-access discipline and
//! injected into sessions rather than reached as globals:
//!
//! - [`HistoryLog`] — the append-only transcript of every frame ever
//!   published since relay start.
//! - [`SubscriberRegistry`] — the live set of browser connections
//!   eligible for broadcast.
//!
//! [`Hub`] composes the two and owns the ordering guarantees that neither
//! can provide alone:
//!
//! - **publish** (append + broadcast) is one atomic step: whatever order
//!   two concurrent writers' frames get in the history is the order every
//!   live browser sees them in.
//! - **browser registration** is snapshot-then-subscribe under the same
//!   lock: a new browser receives the full transcript first and then
//!   every later frame exactly once — nothing lost, nothing duplicated
//!   across the boundary.
//!
//! The registry lock is the only lock held across a channel send, and
//! only for the duration of one publish or one registration.

mod history;
mod hub;
mod registry;

pub use history::HistoryLog;
pub use hub::Hub;
pub use registry::SubscriberRegistry;
