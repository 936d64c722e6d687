//! Process-wide counters shown by the stats command.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    messages: AtomicU64,
    completions_ok: AtomicU64,
    completions_failed: AtomicU64,
    flagged: AtomicU64,
    sessions_ended: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub messages: u64,
    pub completions_ok: u64,
    pub completions_failed: u64,
    pub flagged: u64,
    pub sessions_ended: u64,
}

impl Metrics {
    pub fn message(&self) {
        self.messages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn completion(&self, ok: bool) {
        let counter = if ok {
            &self.completions_ok
        } else {
            &self.completions_failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn flagged(&self) {
        self.flagged.fetch_add(1, Ordering::Relaxed);
    }

    pub fn session_ended(&self) {
        self.sessions_ended.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            messages: self.messages.load(Ordering::Relaxed),
            completions_ok: self.completions_ok.load(Ordering::Relaxed),
            completions_failed: self.completions_failed.load(Ordering::Relaxed),
            flagged: self.flagged.load(Ordering::Relaxed),
            sessions_ended: self.sessions_ended.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = Metrics::default();
        metrics.message();
        metrics.message();
        metrics.completion(true);
        metrics.completion(false);
        metrics.completion(false);
        metrics.flagged();
        metrics.session_ended();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                messages: 2,
                completions_ok: 1,
                completions_failed: 2,
                flagged: 1,
                sessions_ended: 1,
            }
        );
    }
}
