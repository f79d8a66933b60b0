use std::{collections::HashMap, sync::Arc};

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use tokio::sync::{Mutex, OwnedMutexGuard};

use friday_core::{chat::ChatService, config::Config};

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub chat: Arc<ChatService>,
    pub user_locks: Arc<UserLocks>,
}

/// One mutex per user, so conversation rounds for the same user run in order
/// while different users proceed in parallel.
#[derive(Default)]
pub struct UserLocks {
    inner: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl UserLocks {
    pub async fn lock_user(&self, user_id: i64) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().await;
            map.entry(user_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

pub async fn run_polling(cfg: Arc<Config>, chat: Arc<ChatService>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        tracing::info!("Friday AI Assistant running as @{}", me.username());
    }
    tracing::info!(
        "model: {}, history cap: {} turns",
        cfg.groq_model,
        cfg.history_max_turns
    );

    let state = Arc::new(AppState {
        cfg,
        chat,
        user_locks: Arc::new(UserLocks::default()),
    });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
