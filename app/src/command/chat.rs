//! Console conversation through the same session manager the bot uses.
//!
//! Replies come back immediately: pacing only applies to Telegram.

use alicia_config::Config;
use alicia_conversation::RandomSource;
use alicia_core::UserId;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

use super::build_session_manager;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
    /// Conversation owner
    pub user_id: u64,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        config.validate_completion()?;

        let manager = build_session_manager(&config, Arc::new(RandomSource::from_entropy()));
        let user_id = UserId(input.user_id);

        if let Some(msg) = input.message {
            let reply = manager.respond(user_id, &msg).await;
            println!("{}", reply.text);
            return Ok(());
        }

        info!("Interactive chat as user {user_id}. Type 'exit' to quit.");
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "exit" || line == "quit" {
                break;
            }

            let reply = manager.respond(user_id, line).await;
            println!("Alicia: {}", reply.text);
        }

        let stats = manager.stats().await;
        info!("Chat ended after {} exchanges", stats.exchanges);
        Ok(())
    }
}
