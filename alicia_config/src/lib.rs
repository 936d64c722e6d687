use thiserror::Error;

mod schema;

pub use schema::{
    AgentDefaults, AgentsConfig, Config, GROQ_API_KEY_ENV, GROQ_API_URL_ENV, MODEL_ENV,
    PacingConfig, ProviderConfig, ProvidersConfig, TELEGRAM_TOKEN_ENV, TelegramConfig,
    mask_secret,
};

/// Problems that must stop the process before it starts serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Telegram bot token missing: set TELEGRAM_BOT_TOKEN or \"telegram.token\"")]
    MissingTelegramToken,

    #[error("Groq API key missing: set GROQ_API_KEY or \"providers.groq.api_key\"")]
    MissingApiKey,

    #[error("Groq API key is invalid (it must start with gsk_)")]
    MalformedApiKey,

    #[error("Invalid Groq settings: {0}")]
    InvalidProvider(String),

    #[error("Invalid conversation rules: {0}")]
    InvalidRules(String),
}
