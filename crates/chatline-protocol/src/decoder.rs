//! Incremental decoding of raw frame bytes into semantic events.
//!
//! The decoder is the receiving side's view of the wire format: it scans
//! bytes left to right and classifies each one by its immediate context.
//! `{` and `[` open a frame, `}`/`]`/`@` close one (and tag its kind),
//! everything else is payload text. The frame's kind is fully determined
//! by which closing character appears — there is no explicit type field.
//!
//! Because the underlying stream has no message boundaries, a frame may
//! arrive split across any number of reads. [`FrameDecoder`] keeps the
//! partial payload between [`feed`](FrameDecoder::feed) calls, so split
//! input decodes identically to the same bytes delivered in one piece.

use crate::is_terminator;

/// A decoded protocol event, tagged by the closing delimiter that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// A `}`-terminated frame: one chat line, payload verbatim.
    Message(String),
    /// A `]`-terminated frame: the named writer joined.
    Joined(String),
    /// An `@`-terminated frame: the named writer left.
    Left(String),
}

/// Stateful frame decoder.
///
/// Feed it raw bytes in whatever chunks the channel produces; it emits
/// one [`FrameEvent`] per completed frame and holds incomplete payload
/// until the closing delimiter arrives.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    /// Payload bytes of the frame currently being accumulated.
    payload: Vec<u8>,
}

impl FrameDecoder {
    /// Creates a decoder with no pending payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes a chunk of raw bytes, returning every frame completed
    /// within it.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<FrameEvent> {
        let mut events = Vec::new();

        for &byte in bytes {
            match byte {
                // Openers delimit only; they carry no payload.
                b'{' | b'[' => self.payload.clear(),
                terminator if is_terminator(terminator) => {
                    let payload = String::from_utf8_lossy(&self.payload)
                        .into_owned();
                    self.payload.clear();
                    events.push(match terminator {
                        b'}' => FrameEvent::Message(payload),
                        b']' => FrameEvent::Joined(payload),
                        _ => FrameEvent::Left(payload),
                    });
                }
                other => self.payload.push(other),
            }
        }

        events
    }

    /// Returns `true` if no partial frame is pending.
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Decodes a complete byte sequence in one call.
///
/// Trailing bytes of an unterminated frame are discarded; use
/// [`FrameDecoder`] when more input may follow.
pub fn decode_stream(bytes: &[u8]) -> Vec<FrameEvent> {
    FrameDecoder::new().feed(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encode_join, encode_leave, encode_message};

    #[test]
    fn test_round_trip_message() {
        let events = decode_stream(&encode_message("Alice", "hi"));
        assert_eq!(events, vec![FrameEvent::Message("Alice> hi".into())]);
    }

    #[test]
    fn test_round_trip_join() {
        let events = decode_stream(&encode_join("Alice"));
        assert_eq!(events, vec![FrameEvent::Joined("Alice".into())]);
    }

    #[test]
    fn test_round_trip_leave() {
        let events = decode_stream(&encode_leave("Alice"));
        assert_eq!(events, vec![FrameEvent::Left("Alice".into())]);
    }

    #[test]
    fn test_decode_packed_frames() {
        let events = decode_stream(b"[Alice]{Alice> hi}[Bob]");
        assert_eq!(
            events,
            vec![
                FrameEvent::Joined("Alice".into()),
                FrameEvent::Message("Alice> hi".into()),
                FrameEvent::Joined("Bob".into()),
            ]
        );
    }

    #[test]
    fn test_split_at_every_offset_decodes_identically() {
        let bytes = b"[Alice]{Alice> hi}Bob@{Carol> bye}";
        let whole = decode_stream(bytes);

        for split in 0..=bytes.len() {
            let mut decoder = FrameDecoder::new();
            let mut events = decoder.feed(&bytes[..split]);
            events.extend(decoder.feed(&bytes[split..]));
            assert_eq!(events, whole, "split at byte {split}");
        }
    }

    #[test]
    fn test_partial_frame_emits_nothing_until_terminated() {
        let mut decoder = FrameDecoder::new();
        assert!(decoder.feed(b"{Alice> partial").is_empty());
        assert!(!decoder.is_empty());
        assert_eq!(
            decoder.feed(b" line}"),
            vec![FrameEvent::Message("Alice> partial line".into())]
        );
        assert!(decoder.is_empty());
    }

    #[test]
    fn test_one_shot_discards_unterminated_tail() {
        let events = decode_stream(b"{Alice> hi}{Bob> trunc");
        assert_eq!(events, vec![FrameEvent::Message("Alice> hi".into())]);
    }

    #[test]
    fn test_multibyte_payload_split_mid_character() {
        let bytes = "{Ａlice> héllo}".as_bytes();
        let whole = decode_stream(bytes);

        // Split inside the two-byte 'é' sequence.
        let split = bytes.iter().position(|&b| b >= 0x80).unwrap() + 1;
        let mut decoder = FrameDecoder::new();
        let mut events = decoder.feed(&bytes[..split]);
        events.extend(decoder.feed(&bytes[split..]));
        assert_eq!(events, whole);
    }
}
