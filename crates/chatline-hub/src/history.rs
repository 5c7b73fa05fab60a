//! The append-only chat transcript.

use tokio::sync::Mutex;

/// Unbounded, ordered record of all raw frame bytes ever published.
///
/// Lives only in process memory; lost on restart. `append` and
/// `snapshot` are mutually exclusive, so a snapshot never observes a
/// partially written append. Appends from different writers serialize in
/// whatever order they acquire the lock.
#[derive(Debug, Default)]
pub struct HistoryLog {
    transcript: Mutex<Vec<u8>>,
}

impl HistoryLog {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one frame's raw bytes to the transcript.
    pub async fn append(&self, frame: &[u8]) {
        self.transcript.lock().await.extend_from_slice(frame);
    }

    /// Returns the full transcript at call time.
    pub async fn snapshot(&self) -> Vec<u8> {
        self.transcript.lock().await.clone()
    }

    /// Returns the transcript length in bytes.
    pub async fn len(&self) -> usize {
        self.transcript.lock().await.len()
    }

    /// Returns `true` if nothing has been published yet.
    pub async fn is_empty(&self) -> bool {
        self.transcript.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let history = HistoryLog::new();
        history.append(b"[Alice]").await;
        history.append(b"{Alice> hi}").await;
        history.append(b"[Bob]").await;
        assert_eq!(history.snapshot().await, b"[Alice]{Alice> hi}[Bob]");
    }

    #[tokio::test]
    async fn test_snapshot_of_empty_log() {
        let history = HistoryLog::new();
        assert!(history.is_empty().await);
        assert_eq!(history.len().await, 0);
        assert!(history.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let history = HistoryLog::new();
        history.append(b"Alice@").await;
        let before = history.snapshot().await;
        history.append(b"[Bob]").await;
        assert_eq!(before, b"Alice@");
        assert_eq!(history.len().await, 11);
    }
}
