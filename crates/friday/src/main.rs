use std::sync::Arc;

use friday_core::{chat::ChatService, config::Config, history::InMemoryHistory};
use friday_groq::GroqClient;

#[tokio::main]
async fn main() -> Result<(), friday_core::Error> {
    friday_core::logging::init("friday")?;

    let cfg = Arc::new(Config::load()?);

    let history = Arc::new(InMemoryHistory::new(cfg.persona_prompt.clone()));
    let model = Arc::new(GroqClient::new(&cfg));
    let chat = Arc::new(ChatService::new(history, model, cfg.history_max_turns));

    friday_telegram::router::run_polling(cfg, chat)
        .await
        .map_err(|e| friday_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
