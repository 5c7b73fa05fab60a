//! Reassembly of discrete frames from an unbounded byte stream.
//!
//! A channel read can return a fragment of one frame, exactly one frame,
//! or several frames packed together — the stream preserves byte order
//! but not message boundaries. [`FrameAssembler`] is the pure half of the
//! reassembly loop: callers push whatever `receive()` returned and pop
//! complete frames one at a time. Residual bytes belonging to the next
//! frame are retained across calls, never discarded.
//!
//! The I/O half (calling `receive()` until a frame completes or the
//! stream closes) lives with the relay session and the clients, which own
//! their channels.

use crate::is_terminator;

/// Accumulates raw channel bytes and cuts them into logical frames.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    buffer: Vec<u8>,
}

impl FrameAssembler {
    /// Creates an assembler with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw bytes from a channel read.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Removes and returns the next complete frame, if one is buffered.
    ///
    /// A frame is everything up to and including the first terminator
    /// (`}`, `]`, or `@`). Bytes after it stay buffered for the next
    /// call, so packed reads yield their frames one at a time.
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        let end = self.buffer.iter().position(|&b| is_terminator(b))?;
        Some(self.buffer.drain(..=end).collect())
    }

    /// Returns `true` if no residual bytes are buffered.
    ///
    /// Non-empty at stream closure means the peer sent a partial frame
    /// that will never complete; callers drop it rather than surface a
    /// truncated frame.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_complete_frame() {
        let mut asm = FrameAssembler::new();
        asm.push(b"{Alice> hi}");
        assert_eq!(asm.next_frame().unwrap(), b"{Alice> hi}");
        assert!(asm.next_frame().is_none());
        assert!(asm.is_empty());
    }

    #[test]
    fn test_packed_frames_come_out_one_at_a_time() {
        let mut asm = FrameAssembler::new();
        asm.push(b"[Alice]{Alice> hi}Bob@");
        assert_eq!(asm.next_frame().unwrap(), b"[Alice]");
        assert_eq!(asm.next_frame().unwrap(), b"{Alice> hi}");
        assert_eq!(asm.next_frame().unwrap(), b"Bob@");
        assert!(asm.next_frame().is_none());
    }

    #[test]
    fn test_fragment_is_retained_until_terminator() {
        let mut asm = FrameAssembler::new();
        asm.push(b"{Alice> par");
        assert!(asm.next_frame().is_none());
        assert!(!asm.is_empty());

        asm.push(b"tial}");
        assert_eq!(asm.next_frame().unwrap(), b"{Alice> partial}");
        assert!(asm.is_empty());
    }

    #[test]
    fn test_frame_followed_by_fragment() {
        let mut asm = FrameAssembler::new();
        asm.push(b"[Alice]{Alice> tru");
        assert_eq!(asm.next_frame().unwrap(), b"[Alice]");
        assert!(asm.next_frame().is_none());
        assert!(!asm.is_empty());
    }

    #[test]
    fn test_every_split_offset_yields_same_frames() {
        let bytes = b"[Alice]{Alice> hi}Bob@";
        let expected: Vec<&[u8]> =
            vec![b"[Alice]", b"{Alice> hi}", b"Bob@"];

        for split in 0..=bytes.len() {
            let mut asm = FrameAssembler::new();
            let mut frames = Vec::new();
            asm.push(&bytes[..split]);
            while let Some(frame) = asm.next_frame() {
                frames.push(frame);
            }
            asm.push(&bytes[split..]);
            while let Some(frame) = asm.next_frame() {
                frames.push(frame);
            }
            assert_eq!(frames, expected, "split at byte {split}");
        }
    }
}
