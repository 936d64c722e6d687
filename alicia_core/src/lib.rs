#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub mod error;
pub mod persona;
pub mod rules;
pub mod session;

pub use error::{API_KEY_PREFIX, CompletionError, check_api_key};
pub use persona::{DEFAULT_PERSONA_PROMPT, JOKE_REQUEST, PROMO_LINK};
pub use rules::{EndingPolicy, SessionRules};
pub use session::{Exchange, Session, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
}

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: usize,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.8,
            top_p: 0.9,
            max_tokens: 150,
        }
    }
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<LLMResponse, CompletionError>;
}

#[async_trait]
impl<T: LLMProvider + ?Sized> LLMProvider for Arc<T> {
    async fn chat(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<LLMResponse, CompletionError> {
        (**self).chat(messages, options).await
    }
}

/// A user's session behind its own lock.
///
/// Holding the guard for a whole request serializes messages from one user
/// without blocking anybody else.
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSummary {
    /// Users with a live session
    pub users: usize,
    /// Exchanges held across all transcripts
    pub exchanges: usize,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Return the user's session, creating a bootstrap-state one on first contact.
    async fn get_or_create(&self, user_id: UserId) -> SessionHandle;

    async fn get(&self, user_id: UserId) -> Option<SessionHandle>;

    /// Swap in `session` for the user under the user's lock.
    async fn replace(&self, user_id: UserId, session: Session);

    /// Session and exchange totals for statistics.
    ///
    /// Must not wait on a session that is being answered: a busy session
    /// contributes the last exchange count observed for it.
    async fn summary(&self) -> StoreSummary;
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn get_or_create(&self, user_id: UserId) -> SessionHandle {
        (**self).get_or_create(user_id).await
    }

    async fn get(&self, user_id: UserId) -> Option<SessionHandle> {
        (**self).get(user_id).await
    }

    async fn replace(&self, user_id: UserId, session: Session) {
        (**self).replace(user_id, session).await;
    }

    async fn summary(&self) -> StoreSummary {
        (**self).summary().await
    }
}
