use crate::{Command, Error, Result};
use alicia_conversation::{Pacer, SessionManager};
use alicia_providers::GroqProvider;
use std::{sync::Arc, time::Duration};
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};

/// Telegram front end of the persona
#[derive(Clone)]
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Session table and reply routing, shared by every handler
    pub manager: Arc<SessionManager<GroqProvider>>,
    /// Thinking and typing delays
    pub pacer: Pacer,
    /// Allowed chat IDs
    allowed_chats: Arc<Vec<i64>>,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(
        token: String,
        manager: Arc<SessionManager<GroqProvider>>,
        pacer: Pacer,
        allowed_chats: &[String],
    ) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::Config("Telegram bot token is empty".into()));
        }

        // Parse allowed chat IDs
        let allowed_chats = allowed_chats
            .iter()
            .filter_map(|s| s.parse::<i64>().ok())
            .collect();

        Ok(Self {
            bot: Bot::new(token),
            manager,
            pacer,
            allowed_chats: Arc::new(allowed_chats),
        })
    }

    /// Check if a chat is allowed
    #[must_use]
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }

    /// Test connection to Telegram API with linear backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(bot_user) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        bot_user
                            .user
                            .username
                            .unwrap_or_else(|| "no username".to_string()),
                        bot_user.user.id
                    );
                    return;
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);
                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(Duration::from_secs(delay_secs)).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Run the bot until Ctrl+C.
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        self.test_connection().await;

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {e}");
        }

        let bot = self.bot.clone();

        // Updates are handled concurrently across chats and in order within a chat.
        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alicia_conversation::{CompletionAdapter, RandomSource};
    use alicia_core::{CompletionOptions, DEFAULT_PERSONA_PROMPT, SessionRules};

    fn manager() -> Arc<SessionManager<GroqProvider>> {
        let completion = CompletionAdapter::new(
            GroqProvider::new("gsk_test".to_string()),
            CompletionOptions::default(),
            DEFAULT_PERSONA_PROMPT.to_string(),
        );
        Arc::new(SessionManager::in_memory(
            completion,
            SessionRules::default(),
            Arc::new(RandomSource::seeded(7)),
        ))
    }

    fn bot(allow_from: &[&str]) -> Result<TelegramBot> {
        let allow_from: Vec<String> = allow_from.iter().map(ToString::to_string).collect();
        TelegramBot::new(
            "123:abc".to_string(),
            manager(),
            Pacer::disabled(),
            &allow_from,
        )
    }

    #[test]
    fn empty_allow_list_admits_everyone() -> Result<()> {
        let bot = bot(&[])?;
        assert!(bot.is_allowed(42));
        assert!(bot.is_allowed(-1_001));
        Ok(())
    }

    #[test]
    fn allow_list_filters_chats() -> Result<()> {
        let bot = bot(&["42", "-1001", "not-a-number"])?;
        assert!(bot.is_allowed(42));
        assert!(bot.is_allowed(-1001));
        assert!(!bot.is_allowed(7));
        Ok(())
    }

    #[test]
    fn blank_token_is_rejected() {
        let result = TelegramBot::new(
            "  ".to_string(),
            manager(),
            Pacer::disabled(),
            &[],
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
