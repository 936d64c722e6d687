//! Per-user conversation state.
//!
//! A session lives only in memory. It is never patched back to a blank
//! state field by field: a reset builds a new `Session` and swaps it in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Opaque user identifier handed over by the messaging gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One answered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub reply: String,
}

impl Exchange {
    #[must_use]
    pub fn new(user: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            reply: reply.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    /// Changes on every reset
    pub id: Uuid,
    pub user_id: UserId,
    pub first_interaction: bool,
    pub transcript: VecDeque<Exchange>,
    pub started_at: DateTime<Utc>,
    pub flagged_messages: u32,
}

impl Session {
    /// A brand-new session, as seen by a user's very first message.
    #[must_use]
    pub fn new(user_id: UserId, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            first_interaction: true,
            transcript: VecDeque::new(),
            started_at,
            flagged_messages: 0,
        }
    }

    /// A fresh session that skips the bootstrap greeting.
    #[must_use]
    pub fn without_greeting(user_id: UserId, started_at: DateTime<Utc>) -> Self {
        Self {
            first_interaction: false,
            ..Self::new(user_id, started_at)
        }
    }

    /// Append an exchange, evicting the oldest ones beyond `cap`.
    pub fn record(&mut self, exchange: Exchange, cap: usize) {
        self.transcript.push_back(exchange);
        while self.transcript.len() > cap {
            self.transcript.pop_front();
        }
    }

    /// The `n` most recent exchanges, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Exchange> {
        let skip = self.transcript.len().saturating_sub(n);
        self.transcript.iter().skip(skip)
    }

    #[must_use]
    pub fn exchange_count(&self) -> usize {
        self.transcript.len()
    }

    #[must_use]
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.started_at)
    }
}
