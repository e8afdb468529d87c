//! Run-owned collection of consistency diagnostics.
//!
//! Nothing in a collection run aborts on an anomaly. Duplicate keyword
//! matches, keywords without samples and heuristic mismatches are recorded
//! here and reported once the run is complete.

use std::collections::BTreeSet;

/// Ordered, deduplicated diagnostic messages plus a failure count.
///
/// Notes are informational; failures are notes that also count toward
/// [`failure_count`](Self::failure_count). A failure whose message was
/// already recorded is still counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Diagnostics {
    messages: BTreeSet<String>,
    failures: usize,
}

impl Diagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an informational message. Empty messages are ignored.
    pub fn note(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        tracing::debug!(target: "plural_samples::diagnostics", %message, "note");
        self.messages.insert(message);
    }

    /// Record a failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(target: "plural_samples::diagnostics", %message, "failure");
        self.failures += 1;
        if !message.is_empty() {
            self.messages.insert(message);
        }
    }

    /// Messages in sorted order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages.iter().map(String::as_str)
    }

    /// True if `message` was recorded.
    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Number of failures recorded.
    #[inline]
    pub fn failure_count(&self) -> usize {
        self.failures
    }

    /// Number of distinct messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when nothing was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.failures == 0
    }

    /// Fold another sink into this one.
    pub fn merge(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
        self.failures += other.failures;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_are_sorted_and_deduplicated() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.note("b");
        diagnostics.note("a");
        diagnostics.note("b");
        diagnostics.note("");
        assert_eq!(diagnostics.messages().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(diagnostics.failure_count(), 0);
    }

    #[test]
    fn test_repeated_failures_are_counted() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.fail("missing samples");
        diagnostics.fail("missing samples");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.failure_count(), 2);
    }

    #[test]
    fn test_merge() {
        let mut first = Diagnostics::new();
        first.note("x");
        let mut second = Diagnostics::new();
        second.fail("y");
        first.merge(second);
        assert!(first.contains("x"));
        assert!(first.contains("y"));
        assert_eq!(first.failure_count(), 1);
    }
}
