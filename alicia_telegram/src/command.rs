use alicia_conversation::Stats;
use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Joke,
    Stats,
    Clear,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "On fait connaissance !".to_string(),
            },
            BotCommand {
                command: "blague".to_string(),
                description: "Une petite blague !".to_string(),
            },
            BotCommand {
                command: "clear".to_string(),
                description: "On repart à zéro !".to_string(),
            },
            BotCommand {
                command: "stats".to_string(),
                description: "Statistiques du bot".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Les commandes".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    /// `None` for plain text and for commands the bot does not know.
    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        // Remove bot mention and arguments (e.g., "/start@alicia_bot hello")
        let word = text.split_whitespace().next().unwrap_or_default();
        let word = word.split('@').next().unwrap_or(word);

        match word {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/blague" => Some(Self::Joke),
            "/stats" => Some(Self::Stats),
            "/clear" | "/reset" => Some(Self::Clear),
            _ => None,
        }
    }

    #[must_use]
    pub fn looks_like_command(text: &str) -> bool {
        text.trim_start().starts_with('/')
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        "**Commandes :**\n\
         • /start - On fait connaissance !\n\
         • /blague - Une petite blague !\n\
         • /clear - On repart à zéro !\n\
         • /stats - Statistiques du bot\n\n\
         **Surtout parle-moi ! 💕**\n\
         Je suis là pour t'écouter ! 😊"
    }

    #[must_use]
    pub fn stats_text(stats: &Stats) -> String {
        format!(
            "📊 **Stats Alicia**\n\
             👥 Utilisateurs : {}\n\
             💬 Conversations : {}\n\
             🤖 Modèle : {}\n\
             📨 Messages reçus : {}\n\
             ✅ Réponses IA : {} ({} ratées)\n\
             🔥 Messages coquins : {}\n\
             👋 Conversations terminées : {}",
            stats.users,
            stats.exchanges,
            stats.model,
            stats.counters.messages,
            stats.counters.completions_ok,
            stats.counters.completions_failed,
            stats.counters.flagged,
            stats.counters.sessions_ended,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alicia_conversation::MetricsSnapshot;

    #[test]
    fn parses_known_commands() {
        assert_eq!(Command::parse_from_text("/start"), Some(Command::Start));
        assert_eq!(Command::parse_from_text("/HELP"), Some(Command::Help));
        assert_eq!(Command::parse_from_text("/blague"), Some(Command::Joke));
        assert_eq!(Command::parse_from_text(" /stats "), Some(Command::Stats));
        assert_eq!(Command::parse_from_text("/clear"), Some(Command::Clear));
        assert_eq!(Command::parse_from_text("/reset"), Some(Command::Clear));
    }

    #[test]
    fn strips_mentions_and_arguments() {
        assert_eq!(
            Command::parse_from_text("/start@alicia_bot"),
            Some(Command::Start)
        );
        assert_eq!(
            Command::parse_from_text("/blague une autre"),
            Some(Command::Joke)
        );
    }

    #[test]
    fn plain_text_and_unknown_commands_are_not_parsed() {
        assert_eq!(Command::parse_from_text("salut"), None);
        assert_eq!(Command::parse_from_text("/unknown"), None);
        assert_eq!(Command::parse_from_text(""), None);
        assert!(Command::looks_like_command("/unknown"));
        assert!(!Command::looks_like_command("salut /start"));
    }

    #[test]
    fn every_listed_command_parses() {
        for cmd in Command::bot_commands() {
            assert!(
                Command::parse_from_text(&format!("/{}", cmd.command)).is_some(),
                "/{} should parse",
                cmd.command
            );
        }
    }

    #[test]
    fn stats_text_lists_figures() {
        let stats = Stats {
            users: 4,
            exchanges: 17,
            model: "llama-3.1-8b-instant".to_string(),
            counters: MetricsSnapshot {
                messages: 30,
                completions_ok: 17,
                completions_failed: 2,
                flagged: 5,
                sessions_ended: 1,
            },
        };
        let text = Command::stats_text(&stats);
        assert!(text.contains("Utilisateurs : 4"));
        assert!(text.contains("Conversations : 17"));
        assert!(text.contains("llama-3.1-8b-instant"));
        assert!(text.contains("(2 ratées)"));
    }
}
