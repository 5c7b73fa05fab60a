//! Rendering of decoded frame events into display text.

use chatline_protocol::FrameEvent;

/// Renders one decoded event as the line a browser prints.
///
/// The semantic inverse of encoding: message payloads come out verbatim,
/// join and leave events get their announcement suffix. Every rendered
/// event ends in a newline.
pub fn render(event: &FrameEvent) -> String {
    match event {
        FrameEvent::Message(text) => format!("{text}\n"),
        FrameEvent::Joined(nickname) => {
            format!("{nickname} has joined the chat room!\n")
        }
        FrameEvent::Left(nickname) => {
            format!("{nickname} has left the chat room!\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_protocol::decode_stream;

    #[test]
    fn test_render_message_verbatim_with_newline() {
        let event = FrameEvent::Message("Alice> hi".into());
        assert_eq!(render(&event), "Alice> hi\n");
    }

    #[test]
    fn test_render_join() {
        let event = FrameEvent::Joined("Bob".into());
        assert_eq!(render(&event), "Bob has joined the chat room!\n");
    }

    #[test]
    fn test_render_leave() {
        let event = FrameEvent::Left("Alice".into());
        assert_eq!(render(&event), "Alice has left the chat room!\n");
    }

    #[test]
    fn test_render_snapshot_transcript() {
        // Two joins and a message replayed as one snapshot render as
        // three lines.
        let rendered: String = decode_stream(b"[Alice]{Alice> hi}[Bob]")
            .iter()
            .map(render)
            .collect();
        assert_eq!(
            rendered,
            "Alice has joined the chat room!\nAlice> hi\n\
             Bob has joined the chat room!\n"
        );
    }
}
