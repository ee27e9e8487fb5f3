// src/progress.rs

//! Stubbed progress callbacks
//!
//! The host hands the engine a progress sink that records every invocation
//! and produces no terminal output and no prompts. Tests can inspect what
//! was reported without ever seeing a progress bar.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Progress callback surface the host exposes to the engine
pub trait ProgressSink: Send + Sync {
    /// Report the current status message
    fn set_message(&self, message: &str);

    /// Advance progress by the given amount
    fn increment(&self, amount: u64);

    /// Current position
    fn position(&self) -> u64;

    /// Mark the operation finished
    fn finish(&self, message: &str);

    /// Whether the operation was marked finished
    fn is_finished(&self) -> bool;
}

/// Call-recording no-op sink
#[derive(Debug, Default)]
pub struct RecordingProgress {
    position: AtomicU64,
    finished: AtomicBool,
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message reported so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl ProgressSink for RecordingProgress {
    fn set_message(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }

    fn increment(&self, amount: u64) {
        self.position.fetch_add(amount, Ordering::Relaxed);
    }

    fn position(&self) -> u64 {
        self.position.load(Ordering::Relaxed)
    }

    fn finish(&self, message: &str) {
        self.set_message(message);
        self.finished.store(true, Ordering::Relaxed);
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_progress_records_and_stays_silent() {
        let progress = RecordingProgress::new();
        progress.set_message("resolving");
        progress.increment(3);
        progress.finish("done");

        assert_eq!(progress.messages(), vec!["resolving", "done"]);
        assert_eq!(progress.position(), 3);
        assert!(progress.is_finished());
    }
}
