//! Per-message routing.
//!
//! The `SessionManager` owns the session table and decides, for every inbound
//! message, which single strategy produces the reply. Strategies are tried in
//! a fixed order:
//!
//! 1. bootstrap greeting on the first message of a session
//! 2. natural ending, which also replaces the session
//! 3. sensitivity routing (acknowledgment or redirect), never reaching the model
//! 4. random ending hint in long conversations
//! 5. random promotional suggestion
//! 6. completion service

use alicia_core::{JOKE_REQUEST, LLMProvider, Session, SessionRules, SessionStore, UserId};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::completion::CompletionAdapter;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::random::RandomSource;
use crate::replies::{
    self, BOOTSTRAP_GREETING, CLEARED, CLOSINGS, ENDING_HINTS, PROMOTIONS, REDIRECTS,
    START_GREETING,
};
use crate::sensitivity::{self, Tier};
use crate::store::InMemorySessionStore;

/// Which strategy produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Bootstrap,
    Closing,
    Flagged(Tier),
    Redirect,
    EndingHint,
    Promotion,
    Completion,
    Apology,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

impl Reply {
    fn new(text: impl Into<String>, kind: ReplyKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Figures for the stats command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Users with a live session
    pub users: usize,
    /// Exchanges held across all transcripts
    pub exchanges: usize,
    pub model: String,
    pub counters: MetricsSnapshot,
}

pub struct SessionManager<P, S = InMemorySessionStore> {
    store: S,
    completion: CompletionAdapter<P>,
    rules: SessionRules,
    random: Arc<RandomSource>,
    metrics: Metrics,
}

impl<P: LLMProvider> SessionManager<P, InMemorySessionStore> {
    pub fn in_memory(
        completion: CompletionAdapter<P>,
        rules: SessionRules,
        random: Arc<RandomSource>,
    ) -> Self {
        Self::new(InMemorySessionStore::new(), completion, rules, random)
    }
}

impl<P, S> SessionManager<P, S>
where
    P: LLMProvider,
    S: SessionStore,
{
    pub fn new(
        store: S,
        completion: CompletionAdapter<P>,
        rules: SessionRules,
        random: Arc<RandomSource>,
    ) -> Self {
        info!(
            "Creating session manager: transcript_cap={}, history_window={}",
            rules.transcript_cap, rules.history_window
        );
        let completion = completion.with_history_window(rules.history_window);
        Self {
            store,
            completion,
            rules,
            random,
            metrics: Metrics::default(),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Produce the reply to one inbound message.
    ///
    /// The user's session stays locked until the reply is known, so messages
    /// from one user are handled one at a time.
    pub async fn respond(&self, user_id: UserId, message: &str) -> Reply {
        self.metrics.message();
        let handle = self.store.get_or_create(user_id).await;
        let mut session = handle.lock().await;
        let now = Utc::now();

        if session.first_interaction {
            session.first_interaction = false;
            debug!("User {user_id}: bootstrap greeting");
            return Reply::new(BOOTSTRAP_GREETING, ReplyKind::Bootstrap);
        }

        let exchanges = session.exchange_count();
        if self.rules.ending.should_end(exchanges, session.elapsed(now)) {
            info!(
                "User {user_id}: session {} ended after {exchanges} exchanges",
                session.id
            );
            *session = Session::new(user_id, now);
            self.metrics.session_ended();
            return Reply::new(self.random.choose(CLOSINGS), ReplyKind::Closing);
        }

        let score = sensitivity::score(message);
        if let Some(tier) = Tier::from_score(score) {
            session.flagged_messages = session.flagged_messages.saturating_add(1);
            self.metrics.flagged();
            info!(
                "User {user_id}: flagged message (score {score}, {} in session)",
                session.flagged_messages
            );
            if session.flagged_messages >= self.rules.redirect_after_flags {
                return Reply::new(self.random.choose(REDIRECTS), ReplyKind::Redirect);
            }
            return Reply::new(
                self.random.choose(replies::tier_pool(tier)),
                ReplyKind::Flagged(tier),
            );
        }

        if self.rules.hint_eligible(exchanges) && self.random.chance(self.rules.hint_probability)
        {
            debug!("User {user_id}: ending hint");
            return Reply::new(self.random.choose(ENDING_HINTS), ReplyKind::EndingHint);
        }

        if self.rules.promotion_eligible(exchanges)
            && self.random.chance(self.rules.promotion_probability)
        {
            debug!("User {user_id}: promotion");
            return Reply::new(self.random.choose(PROMOTIONS), ReplyKind::Promotion);
        }

        self.complete(&mut session, message).await
    }

    async fn complete(&self, session: &mut Session, message: &str) -> Reply {
        match self
            .completion
            .reply(session, message, self.rules.transcript_cap)
            .await
        {
            Ok(text) => {
                self.metrics.completion(true);
                Reply::new(text, ReplyKind::Completion)
            }
            Err(e) => {
                self.metrics.completion(false);
                warn!("User {}: completion failed: {e}", session.user_id);
                Reply::new(replies::apology(&e), ReplyKind::Apology)
            }
        }
    }

    /// Start over from the bootstrap state.
    pub async fn start(&self, user_id: UserId) -> &'static str {
        self.store
            .replace(user_id, Session::new(user_id, Utc::now()))
            .await;
        info!("User {user_id}: session restarted");
        START_GREETING
    }

    /// Forget the conversation but skip the greeting on the next message.
    pub async fn clear(&self, user_id: UserId) -> &'static str {
        self.store
            .replace(user_id, Session::without_greeting(user_id, Utc::now()))
            .await;
        info!("User {user_id}: session cleared");
        CLEARED
    }

    /// Ask the model for a joke.
    ///
    /// An existing session provides the context and records the joke; a user
    /// without one gets a throwaway session and no session is created.
    pub async fn joke(&self, user_id: UserId) -> Reply {
        if let Some(handle) = self.store.get(user_id).await {
            let mut session = handle.lock().await;
            return self.complete(&mut session, JOKE_REQUEST).await;
        }
        let mut scratch = Session::without_greeting(user_id, Utc::now());
        self.complete(&mut scratch, JOKE_REQUEST).await
    }

    /// Totals for the stats command. Never waits on a session that is
    /// being answered.
    pub async fn stats(&self) -> Stats {
        let summary = self.store.summary().await;
        Stats {
            users: summary.users,
            exchanges: summary.exchanges,
            model: self.completion.options().model.clone(),
            counters: self.metrics.snapshot(),
        }
    }
}
