use std::sync::Arc;

use crate::{
    domain::{Role, Turn, UserId},
    history::HistoryStore,
    model::CompletionClient,
    Result,
};

/// Conversation orchestrator. One `respond` call is one full round: record
/// the user's message, ask the model, record the reply, enforce the cap.
pub struct ChatService {
    history: Arc<dyn HistoryStore>,
    model: Arc<dyn CompletionClient>,
    max_turns: usize,
}

impl ChatService {
    pub fn new(
        history: Arc<dyn HistoryStore>,
        model: Arc<dyn CompletionClient>,
        max_turns: usize,
    ) -> Self {
        Self {
            history,
            model,
            max_turns,
        }
    }

    /// Run one conversation round for `user` and return the assistant reply.
    ///
    /// The user's turn is appended before the model is called and is not
    /// rolled back when the completion fails.
    pub async fn respond(&self, user: UserId, text: &str) -> Result<String> {
        self.history.get_or_create(user).await;
        self.history.append(user, Role::User, text).await;

        let turns = self.history.snapshot(user).await;
        let reply = self.model.complete(&turns).await?;

        self.history.append(user, Role::Assistant, &reply).await;
        self.history.trim(user, self.max_turns).await;

        Ok(reply)
    }

    /// Forget the user's conversation.
    pub async fn clear(&self, user: UserId) {
        self.history.clear(user).await;
    }
}
