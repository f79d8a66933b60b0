//! Telegram update handlers.
//!
//! Each handler is a thin adapter: extract what the update carries, then call
//! into `friday-core` for the conversation work.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod commands;
mod text;

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user_id) = msg.from().map(|u| u.id.0 as i64) else {
        return Ok(());
    };

    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(bot, msg, state).await;
        }

        // Sequentialize messages per user so history rounds cannot interleave.
        let _guard = state.user_locks.lock_user(user_id).await;
        return text::handle_text(bot, msg, state).await;
    }

    // Photos, stickers, voice and the rest are ignored.
    Ok(())
}
