//! Thresholds that drive the per-message routing decision.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// When a conversation closes on its own.
///
/// The conversation ends once `hard_limit` exchanges are reached, or
/// `slow_limit` exchanges after `slow_after_minutes`, or `soft_limit`
/// exchanges regardless of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndingPolicy {
    pub hard_limit: usize,
    pub slow_limit: usize,
    pub slow_after_minutes: i64,
    pub soft_limit: usize,
}

impl Default for EndingPolicy {
    fn default() -> Self {
        Self {
            hard_limit: 25,
            slow_limit: 15,
            slow_after_minutes: 20,
            soft_limit: 20,
        }
    }
}

impl EndingPolicy {
    /// `slow_after_minutes` as a duration, `None` when it cannot be represented.
    #[must_use]
    pub fn slow_after(&self) -> Option<Duration> {
        Duration::try_minutes(self.slow_after_minutes)
    }

    #[must_use]
    pub fn should_end(&self, exchanges: usize, elapsed: Duration) -> bool {
        if exchanges >= self.hard_limit {
            return true;
        }
        // An unrepresentable delay never elapses.
        if exchanges >= self.slow_limit && self.slow_after().is_some_and(|after| elapsed >= after)
        {
            return true;
        }
        exchanges >= self.soft_limit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRules {
    /// Maximum exchanges kept in a transcript
    pub transcript_cap: usize,
    /// Exchanges forwarded to the completion service
    pub history_window: usize,
    /// Flagged messages after which every flagged message gets the redirect
    pub redirect_after_flags: u32,
    pub hint_min_exchanges: usize,
    pub hint_probability: f64,
    /// Promotion is considered only above this many exchanges
    pub promotion_above_exchanges: usize,
    pub promotion_probability: f64,
    pub ending: EndingPolicy,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            transcript_cap: 8,
            history_window: 5,
            redirect_after_flags: 3,
            hint_min_exchanges: 12,
            hint_probability: 0.15,
            promotion_above_exchanges: 5,
            promotion_probability: 0.08,
            ending: EndingPolicy::default(),
        }
    }
}

impl SessionRules {
    #[must_use]
    pub const fn hint_eligible(&self, exchanges: usize) -> bool {
        exchanges >= self.hint_min_exchanges
    }

    #[must_use]
    pub const fn promotion_eligible(&self, exchanges: usize) -> bool {
        exchanges > self.promotion_above_exchanges
    }
}
