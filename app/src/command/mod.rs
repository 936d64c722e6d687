//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use alicia_config::Config;
use alicia_conversation::{CompletionAdapter, RandomSource, SessionManager};
use alicia_core::DEFAULT_PERSONA_PROMPT;
use alicia_providers::GroqProvider;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod chat;
mod info;
mod init;
mod telegram;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use telegram::{TelegramInput, TelegramStrategy};
pub use version::VersionStrategy;

/// Wire the Groq provider, the persona and the session table from `config`.
fn build_session_manager(
    config: &Config,
    random: Arc<RandomSource>,
) -> SessionManager<GroqProvider> {
    let groq = &config.providers.groq;
    let provider = GroqProvider::new(groq.api_key.clone())
        .with_base_url(groq.base_url.clone())
        .with_timeout(Duration::from_secs(groq.timeout_secs));

    let defaults = &config.agents.defaults;
    let persona = defaults
        .system_prompt
        .clone()
        .unwrap_or_else(|| DEFAULT_PERSONA_PROMPT.to_string());

    info!(
        "Completion: model={}, max_tokens={}, temperature={}, top_p={}, timeout={}s",
        defaults.model, defaults.max_tokens, defaults.temperature, defaults.top_p, groq.timeout_secs
    );

    let completion = CompletionAdapter::new(provider, defaults.completion_options(), persona);
    SessionManager::in_memory(completion, config.conversation.clone(), random)
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via the associated type, and
/// calls are monomorphized at the match in `main`.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
