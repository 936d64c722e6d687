use crate::command::{CommandStrategy, build_session_manager};
use alicia_config::{Config, mask_secret};
use alicia_conversation::{Pacer, RandomSource};
use alicia_telegram::TelegramBot;
use std::sync::Arc;
use tracing::info;

/// Input for Telegram bot command.
pub struct TelegramInput {
    /// Optional bot token (overrides config)
    pub token: Option<String>,
}

/// Strategy for running Telegram bot.
pub struct TelegramStrategy;

impl CommandStrategy for TelegramStrategy {
    type Input = TelegramInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        if let Some(token) = input.token {
            config.telegram.token = token;
        }

        // Refuse to start without credentials
        config.validate()?;

        info!("Starting Alicia...");
        info!("Groq key: {}", mask_secret(&config.providers.groq.api_key));
        info!("Model: {}", config.agents.defaults.model);
        if config.telegram.allow_from.is_empty() {
            info!("Allow list empty, every chat is served");
        } else {
            info!("Allow list: {}", config.telegram.allow_from.join(", "));
        }

        let random = Arc::new(RandomSource::from_entropy());
        let manager = Arc::new(build_session_manager(&config, Arc::clone(&random)));
        let pacer = Pacer::new(random, config.pacing.enabled);

        let bot = TelegramBot::new(
            config.telegram.token.clone(),
            manager,
            pacer,
            &config.telegram.allow_from,
        )?;

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
