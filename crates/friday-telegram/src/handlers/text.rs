use std::sync::Arc;

use teloxide::{prelude::*, types::ChatAction};

use friday_core::{domain::UserId, formatting::split_plain_chunks};

use crate::router::AppState;

pub async fn handle_text(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let Some(text) = msg.text().map(|s| s.to_string()) else {
        return Ok(());
    };

    let username = user
        .username
        .clone()
        .unwrap_or_else(|| "unknown".to_string());
    tracing::info!("{username}: {text}");

    // Typing indicator is best-effort; a failed chat action must not eat the reply.
    let _ = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await;

    let reply = match state.chat.respond(UserId(user.id.0 as i64), &text).await {
        Ok(reply) => reply,
        Err(e) => {
            // The user's turn stays recorded; the user gets no error notice.
            tracing::error!("completion failed for {username}: {e}");
            return Ok(());
        }
    };

    for chunk in split_plain_chunks(&reply, state.cfg.telegram_safe_limit) {
        bot.send_message(msg.chat.id, chunk).await?;
    }

    Ok(())
}
