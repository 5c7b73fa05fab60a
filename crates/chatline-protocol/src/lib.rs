//! Wire protocol for Chatline.
//!
//! This crate defines the "language" that writers, browsers, and the relay
//! speak:
//!
//! - **Frames** ([`Frame`], [`classify`]) — the delimited protocol units
//!   that travel on the wire, and the first-frame role handshake.
//! - **Decoder** ([`FrameDecoder`], [`decode_stream`]) — turns raw frame
//!   bytes back into semantic events, tolerating frames split across reads.
//! - **Assembler** ([`FrameAssembler`]) — cuts a raw byte stream into
//!   individual frames, retaining fragments of the next frame.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while classifying
//!   or parsing frames.
//!
//! # Architecture
//!
//! The protocol layer is pure: no I/O, no shared state. It sits between
//! transport (raw bytes) and the relay/client logic:
//!
//! ```text
//! Transport (bytes) → Protocol (Frame / FrameEvent) → Hub / Renderer
//! ```
//!
//! # Wire format
//!
//! Every frame is its payload wrapped by a single delimiter pair, with the
//! closing character doubling as the frame's type tag:
//!
//! ```text
//! {Browser}          role sentinel (browser handshake)
//! [nickname]         join
//! {nickname> text}   message
//! nickname@          leave (relay-synthesized, never sent by a client)
//! ```
//!
//! There is no length prefix and no escaping. Payload text containing any
//! of `{`, `}`, `[`, `]`, or `@` corrupts framing — a known limitation of
//! the wire format, kept for compatibility rather than silently fixed.

mod assembler;
mod decoder;
mod error;
mod frame;

pub use assembler::FrameAssembler;
pub use decoder::{decode_stream, FrameDecoder, FrameEvent};
pub use error::ProtocolError;
pub use frame::{
    classify, encode_join, encode_leave, encode_message, Frame, Handshake,
    ROLE_SENTINEL,
};

/// The three closing characters of the wire format.
///
/// A byte stream position ending in one of these completes a frame; which
/// one appeared tells the decoder the frame's kind (`}` message, `]` join,
/// `@` leave).
pub const TERMINATORS: [u8; 3] = [b'}', b']', b'@'];

/// Returns `true` if `byte` closes a frame.
pub fn is_terminator(byte: u8) -> bool {
    TERMINATORS.contains(&byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_set() {
        assert!(is_terminator(b'}'));
        assert!(is_terminator(b']'));
        assert!(is_terminator(b'@'));
        assert!(!is_terminator(b'{'));
        assert!(!is_terminator(b'['));
        assert!(!is_terminator(b'a'));
    }
}
