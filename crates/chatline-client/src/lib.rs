//! Client side of the Chatline protocol.
//!
//! Two roles connect to the relay:
//!
//! - [`WriterClient`] announces a nickname and submits chat lines.
//! - [`BrowserClient`] sends the role sentinel, then turns the raw frame
//!   stream (history snapshot first, live broadcasts after) into
//!   human-readable lines via [`render`].
//!
//! Both are single-threaded and purely sequential against their one
//! channel; all framing logic comes from `chatline-protocol`, so a frame
//! split across reads decodes exactly as the relay's own reassembler
//! would.

mod browser;
mod error;
mod render;
mod writer;

pub use browser::BrowserClient;
pub use error::ClientError;
pub use render::render;
pub use writer::WriterClient;
