use alicia_config::{Config, mask_secret};

/// Strategy for displaying configuration information.
///
/// Secrets are masked; the conversation rules are printed as loaded,
/// after environment overrides.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== Alicia Configuration ===\n");

        println!("Groq:");
        println!("  API Key: {}", mask_secret(&config.providers.groq.api_key));
        println!("  Base URL: {}", config.providers.groq.base_url);
        println!("  Timeout: {}s", config.providers.groq.timeout_secs);
        println!();

        let defaults = &config.agents.defaults;
        println!("Agent Defaults:");
        println!("  Model: {}", defaults.model);
        println!("  Max Tokens: {}", defaults.max_tokens);
        println!("  Temperature: {}", defaults.temperature);
        println!("  Top P: {}", defaults.top_p);
        if let Some(ref prompt) = defaults.system_prompt {
            println!("  System Prompt: {}", truncate(prompt, 60));
        }
        println!();

        let rules = &config.conversation;
        println!("Conversation:");
        println!("  Transcript Cap: {}", rules.transcript_cap);
        println!("  History Window: {}", rules.history_window);
        println!("  Redirect After Flags: {}", rules.redirect_after_flags);
        println!(
            "  Ending Hint: from {} exchanges, p={}",
            rules.hint_min_exchanges, rules.hint_probability
        );
        println!(
            "  Promotion: above {} exchanges, p={}",
            rules.promotion_above_exchanges, rules.promotion_probability
        );
        println!(
            "  Ending: hard={}, slow={} after {}min, soft={}",
            rules.ending.hard_limit,
            rules.ending.slow_limit,
            rules.ending.slow_after_minutes,
            rules.ending.soft_limit
        );
        println!();

        println!("Pacing: {}", if config.pacing.enabled { "on" } else { "off" });
        println!();

        println!("Telegram:");
        println!("  Token: {}", mask_secret(&config.telegram.token));
        if config.telegram.allow_from.is_empty() {
            println!("  Allow From: (empty - all users allowed)");
        } else {
            println!("  Allow From: {}", config.telegram.allow_from.join(", "));
        }

        if let Err(e) = config.validate() {
            println!();
            println!("⚠️  {e}");
        }

        Ok(())
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("court", 60), "court");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
