use crate::{Command, Result, TelegramBot};
use alicia_conversation::{COMMAND_PAUSE, START_PAUSE};
use alicia_core::UserId;
use teloxide::{
    requests::Requester,
    types::{ChatAction, Message},
};
use tracing::{debug, info, warn};

/// Handle bot commands
pub async fn handle_command(
    bot: TelegramBot,
    msg: Message,
    user_id: UserId,
    cmd: Command,
) -> Result<()> {
    let username = username(&msg);

    let reply = match cmd {
        Command::Start => {
            info!("[@{username}] Command: /start");
            let greeting = bot.manager.start(user_id).await;
            bot.pacer.pause(START_PAUSE).await;
            greeting.to_string()
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.pacer.pause(COMMAND_PAUSE).await;
            Command::help_text().to_string()
        }
        Command::Joke => {
            info!("[@{username}] Command: /blague");
            bot.pacer.pause(COMMAND_PAUSE).await;
            bot.bot
                .send_chat_action(msg.chat.id, ChatAction::Typing)
                .await?;
            bot.manager.joke(user_id).await.text
        }
        Command::Stats => {
            info!("[@{username}] Command: /stats");
            Command::stats_text(&bot.manager.stats().await)
        }
        Command::Clear => {
            info!("[@{username}] Command: /clear");
            let cleared = bot.manager.clear(user_id).await;
            bot.pacer.pause(COMMAND_PAUSE).await;
            cleared.to_string()
        }
    };

    bot.bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Handle any message (commands or regular text)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!("Ignoring non-text message in chat {}", msg.chat.id);
        return Ok(());
    };
    let Some(user) = msg.from.as_ref() else {
        debug!("Ignoring message without sender in chat {}", msg.chat.id);
        return Ok(());
    };
    if !bot.is_allowed(msg.chat.id.0) {
        warn!("Ignoring message from chat {} (not in allow list)", msg.chat.id);
        return Ok(());
    }

    let user_id = UserId(user.id.0);
    let username = username(&msg);

    // Check if this is a command
    if let Some(cmd) = Command::parse_from_text(text) {
        return handle_command(bot, msg, user_id, cmd).await;
    }
    if Command::looks_like_command(text) {
        debug!("[@{username}] Ignoring unknown command: {text}");
        return Ok(());
    }

    info!("[@{username}] Message: {text}");

    bot.pacer.think().await;

    bot.bot
        .send_chat_action(msg.chat.id, ChatAction::Typing)
        .await?;

    let reply = bot.manager.respond(user_id, text).await;

    info!("[@{username}] Response ({:?}): {}", reply.kind, reply.text);

    bot.pacer.type_out(&reply.text).await;

    bot.bot.send_message(msg.chat.id, reply.text).await?;

    Ok(())
}

fn username(msg: &Message) -> String {
    msg.from
        .as_ref()
        .and_then(|u| u.username.clone())
        .unwrap_or_else(|| "unknown".to_string())
}
