use async_trait::async_trait;

use crate::{domain::Turn, Result};

/// Port to a chat-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Produce the assistant's next reply for the given conversation.
    ///
    /// Implementations surface transport and decoding problems as
    /// `Error::Completion`; callers decide what a failed completion means for
    /// the conversation.
    async fn complete(&self, turns: &[Turn]) -> Result<String>;
}
