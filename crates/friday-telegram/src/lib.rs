//! Telegram adapter: long-polling dispatcher and update handlers.

pub mod handlers;
pub mod router;
