use alicia_core::{CompletionError, CompletionOptions, SessionRules, check_api_key};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::ConfigError;

pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const GROQ_API_URL_ENV: &str = "GROQ_API_URL";
pub const MODEL_ENV: &str = "ALICIA_MODEL";

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub agents: AgentsConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub conversation: SessionRules,
    #[serde(default)]
    pub pacing: PacingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct AgentsConfig {
    #[serde(default)]
    pub defaults: AgentDefaults,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentDefaults {
    #[serde(default = "AgentDefaults::default_model")]
    pub model: String,
    #[serde(default = "AgentDefaults::default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "AgentDefaults::default_temperature")]
    pub temperature: f32,
    #[serde(default = "AgentDefaults::default_top_p")]
    pub top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            model: Self::default_model(),
            max_tokens: Self::default_max_tokens(),
            temperature: Self::default_temperature(),
            top_p: Self::default_top_p(),
            system_prompt: None,
        }
    }
}

impl AgentDefaults {
    fn default_model() -> String {
        CompletionOptions::default().model
    }

    const fn default_max_tokens() -> usize {
        150
    }

    const fn default_temperature() -> f32 {
        0.8
    }

    const fn default_top_p() -> f32 {
        0.9
    }

    #[must_use]
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            model: self.model.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub groq: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ProviderConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    fn default_base_url() -> String {
        "https://api.groq.com/openai/v1".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        15
    }
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    /// Chat ids allowed to talk to the bot; empty admits everyone
    #[serde(default)]
    pub allow_from: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PacingConfig {
    /// Simulated thinking and typing delays
    #[serde(default = "PacingConfig::default_enabled")]
    pub enabled: bool,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
        }
    }
}

impl PacingConfig {
    const fn default_enabled() -> bool {
        true
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("alicia"))
    }

    /// Read `~/alicia/config.json` if present, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = serde_json::from_str(&content)?;
            info!("Loaded config from {}", config_path.display());
            config
        } else {
            info!(
                "No config file at {}, using defaults and environment",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Override file values with non-empty values from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = value(TELEGRAM_TOKEN_ENV) {
            self.telegram.token = token;
        }
        if let Some(key) = value(GROQ_API_KEY_ENV) {
            self.providers.groq.api_key = key;
        }
        if let Some(url) = value(GROQ_API_URL_ENV) {
            self.providers.groq.base_url = url;
        }
        if let Some(model) = value(MODEL_ENV) {
            self.agents.defaults.model = model;
        }
    }

    /// Everything the Telegram bot needs before it may start serving.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram.token.trim().is_empty() {
            return Err(ConfigError::MissingTelegramToken);
        }
        self.validate_completion()
    }

    /// The completion key and the conversation rules.
    pub fn validate_completion(&self) -> Result<(), ConfigError> {
        check_api_key(&self.providers.groq.api_key).map_err(|e| match e {
            CompletionError::MissingCredential => ConfigError::MissingApiKey,
            _ => ConfigError::MalformedApiKey,
        })?;
        if self.providers.groq.timeout_secs == 0 {
            return Err(ConfigError::InvalidProvider(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        self.validate_rules()
    }

    fn validate_rules(&self) -> Result<(), ConfigError> {
        let rules = &self.conversation;
        if rules.transcript_cap == 0 {
            return Err(ConfigError::InvalidRules(
                "transcript_cap must be at least 1".to_string(),
            ));
        }
        for (name, p) in [
            ("hint_probability", rules.hint_probability),
            ("promotion_probability", rules.promotion_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::InvalidRules(format!(
                    "{name} must be between 0 and 1, got {p}"
                )));
            }
        }
        let minutes = rules.ending.slow_after_minutes;
        if minutes < 0 || rules.ending.slow_after().is_none() {
            return Err(ConfigError::InvalidRules(format!(
                "ending.slow_after_minutes must be a non-negative number of minutes, got {minutes}"
            )));
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "agents": {
    "defaults": {
      "model": "llama-3.1-8b-instant",
      "max_tokens": 150,
      "temperature": 0.8,
      "top_p": 0.9
    }
  },
  "providers": {
    "groq": {
      "api_key": "gsk_your-groq-api-key-here",
      "base_url": "https://api.groq.com/openai/v1",
      "timeout_secs": 15
    }
  },
  "telegram": {
    "token": "your-telegram-bot-token-here",
    "allow_from": []
  },
  "conversation": {
    "transcript_cap": 8,
    "history_window": 5,
    "redirect_after_flags": 3,
    "hint_min_exchanges": 12,
    "hint_probability": 0.15,
    "promotion_above_exchanges": 5,
    "promotion_probability": 0.08,
    "ending": {
      "hard_limit": 25,
      "slow_limit": 15,
      "slow_after_minutes": 20,
      "soft_limit": 20
    }
  },
  "pacing": {
    "enabled": true
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put your Groq API key (gsk_...) and Telegram bot token in the file");
        println!("      or export {GROQ_API_KEY_ENV} and {TELEGRAM_TOKEN_ENV}");
        println!("   2. Run 'alicia telegram' to start the bot");
        println!("   3. Or run 'alicia chat' to talk to her from the terminal");
        println!();
        Ok(())
    }
}

/// Keep the first characters of a secret for display.
#[must_use]
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let shown: String = secret.chars().take(8).collect();
    if shown.len() < secret.len() {
        format!("{shown}...")
    } else {
        "***".to_string()
    }
}
