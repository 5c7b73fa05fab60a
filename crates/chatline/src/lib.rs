//! # Chatline
//!
//! A single-room text relay. Writer connections submit delimited chat
//! frames; the relay appends each frame to an in-memory transcript and
//! broadcasts it to every connected browser. A browser that connects
//! mid-conversation first receives the full transcript as one atomic
//! snapshot, then every later frame exactly once.
//!
//! This crate ties the layers together and owns the binaries:
//!
//! ```text
//! chatline-transport (TCP channel)
//!         │
//! chatline-protocol  (framing, reassembly)
//!         │
//! chatline-hub       (history + subscriber registry)
//!         │
//! chatline           (accept loop, per-connection sessions, shutdown)
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use chatline::RelayServer;
//!
//! # async fn run() -> Result<(), chatline::ChatlineError> {
//! let server = RelayServer::builder().bind("0.0.0.0:7440").build().await?;
//! server.run().await
//! # }
//! ```

mod config;
mod error;
mod server;
mod session;

pub use config::RelayConfig;
pub use error::ChatlineError;
pub use server::{RelayHandle, RelayServer, RelayServerBuilder};
