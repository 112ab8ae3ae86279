//! One-shot scroll reveal bookkeeping.
//!
//! Every watched key starts pending. The first intersection report at or
//! above the threshold reveals it and drops it from the watch list, so later
//! reports for the same key are ignored.

use tracing::trace;

#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    threshold: f64,
    pending: Vec<K>,
}

impl<K: PartialEq> RevealTracker<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start watching `key`. Watching twice is a no-op.
    pub fn watch(&mut self, key: K) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    /// Feed one observer entry. Returns `true` exactly once per key: when it
    /// should be marked visible and unobserved.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio < self.threshold {
            return false;
        }
        match self.pending.iter().position(|k| k == key) {
            Some(index) => {
                self.pending.remove(index);
                trace!(ratio, remaining = self.pending.len(), "Revealed element");
                true
            }
            None => false,
        }
    }

    /// Reveal everything still pending, for browsers without an observer.
    pub fn reveal_all(&mut self) -> Vec<K> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
