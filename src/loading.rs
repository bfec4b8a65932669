//! Load Suppression
//!
//! A reference-counted "currently loading" guard. While any token is alive,
//! the persistence bridge must not write flag changes back to the store:
//! values arriving from a bulk load are existing state, not user edits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts in-flight bulk loads; cheap to clone and share
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    active: Arc<AtomicUsize>,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a load. The returned token keeps the tracker busy until dropped;
    /// release happens on every exit path, including unwinding.
    pub fn start(&self) -> LoadToken {
        self.active.fetch_add(1, Ordering::SeqCst);
        LoadToken {
            active: Arc::clone(&self.active),
        }
    }

    /// True iff no load is in progress; write-back may proceed.
    pub fn is_idle(&self) -> bool {
        self.active.load(Ordering::SeqCst) == 0
    }
}

/// RAII token held for the duration of one bulk load. Tokens nest.
#[derive(Debug)]
pub struct LoadToken {
    active: Arc<AtomicUsize>,
}

impl Drop for LoadToken {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_idle() {
        assert!(LoadTracker::new().is_idle());
    }

    #[test]
    fn token_suppresses_until_dropped() {
        let tracker = LoadTracker::new();
        let token = tracker.start();
        assert!(!tracker.is_idle());
        drop(token);
        assert!(tracker.is_idle());
    }

    #[test]
    fn nested_tokens_all_must_release() {
        let tracker = LoadTracker::new();
        let outer = tracker.start();
        let inner = tracker.start();
        drop(inner);
        assert!(!tracker.is_idle());
        drop(outer);
        assert!(tracker.is_idle());
    }

    #[test]
    fn token_releases_on_unwind() {
        let tracker = LoadTracker::new();
        let clone = tracker.clone();
        let _ = std::panic::catch_unwind(move || {
            let _token = clone.start();
            panic!("load failed");
        });
        assert!(tracker.is_idle());
    }
}
