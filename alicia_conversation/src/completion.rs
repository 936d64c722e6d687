//! Bridge between a session and the completion service.

use alicia_core::{
    ChatMessage, CompletionError, CompletionOptions, Exchange, LLMProvider, Role, Session,
};
use tracing::debug;

/// Builds the prompt from a session, calls the provider and records the
/// exchange when it succeeds.
pub struct CompletionAdapter<P> {
    provider: P,
    options: CompletionOptions,
    persona: String,
    history_window: usize,
}

impl<P: LLMProvider> CompletionAdapter<P> {
    pub fn new(provider: P, options: CompletionOptions, persona: String) -> Self {
        Self {
            provider,
            options,
            persona,
            history_window: 5,
        }
    }

    #[must_use]
    pub const fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &CompletionOptions {
        &self.options
    }

    /// System persona, the recent exchanges oldest first, then `message`.
    #[must_use]
    pub fn build_messages(&self, session: &Session, message: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2 * self.history_window + 2);
        messages.push(ChatMessage::new(Role::System, self.persona.clone()));
        for exchange in session.recent(self.history_window) {
            messages.push(ChatMessage::new(Role::User, exchange.user.clone()));
            messages.push(ChatMessage::new(Role::Assistant, exchange.reply.clone()));
        }
        messages.push(ChatMessage::new(Role::User, message));
        messages
    }

    /// Ask for a reply to `message`.
    ///
    /// On success the trimmed reply is appended to the transcript (bounded by
    /// `cap`); on failure the session is left untouched.
    pub async fn reply(
        &self,
        session: &mut Session,
        message: &str,
        cap: usize,
    ) -> Result<String, CompletionError> {
        let messages = self.build_messages(session, message);
        let response = self.provider.chat(&messages, &self.options).await?;

        let reply = response.content.trim().to_string();
        if reply.is_empty() {
            return Err(CompletionError::InvalidResponse(
                "empty completion".to_string(),
            ));
        }

        session.record(Exchange::new(message, reply.clone()), cap);
        debug!(
            "Session {} now holds {} exchanges",
            session.id,
            session.exchange_count()
        );
        Ok(reply)
    }
}
