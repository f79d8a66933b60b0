use std::sync::Arc;

use teloxide::prelude::*;

use friday_core::domain::UserId;

use crate::router::AppState;

const START_REPLY: &str = "Hello! I'm Friday 🤖\n\
Your AI assistant.\n\n\
Ask me anything!\n\n\
Commands:\n\
/help - Show help\n\
/clear - Reset conversation";

const HELP_REPLY: &str = "Available commands:\n\n\
/start - Start the bot\n\
/help - Show this message\n\
/clear - Reset conversation memory\n\n\
Just send a message and I'll reply!";

const CLEAR_REPLY: &str = "Conversation memory cleared.";

fn parse_command(text: &str) -> String {
    // Telegram may send `/cmd@botname arg1 ...`
    let first = text.trim().split_whitespace().next().unwrap_or("");
    first
        .trim_start_matches('/')
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

pub async fn handle_command(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match parse_command(text).as_str() {
        "start" => {
            bot.send_message(msg.chat.id, START_REPLY).await?;
        }
        "help" => {
            bot.send_message(msg.chat.id, HELP_REPLY).await?;
        }
        "clear" => {
            let Some(user) = msg.from() else {
                return Ok(());
            };
            state.chat.clear(UserId(user.id.0 as i64)).await;
            bot.send_message(msg.chat.id, CLEAR_REPLY).await?;
        }
        other => {
            tracing::debug!("ignoring unknown command /{other}");
        }
    }

    Ok(())
}
