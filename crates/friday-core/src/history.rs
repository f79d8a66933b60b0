use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Role, Turn, UserId};

/// Storage port for per-user conversation history.
///
/// The store owns the persona seeding rule: a user's history is created with a
/// single system turn the first time it is looked up, and never reseeded after
/// that. `clear` leaves an empty entry behind on purpose, so a cleared
/// conversation continues without the persona until the process restarts.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Return the user's history, creating and seeding it if absent.
    async fn get_or_create(&self, user: UserId) -> Vec<Turn>;

    /// Append one turn to the user's history, creating an empty entry if absent.
    async fn append(&self, user: UserId, role: Role, content: &str);

    /// Drop oldest turns until at most `max_len` remain.
    ///
    /// The trim is purely positional; the system turn is evicted like any
    /// other once the conversation grows past the cap.
    async fn trim(&self, user: UserId, max_len: usize);

    /// Reset the user's history to an empty list.
    async fn clear(&self, user: UserId);

    /// Copy of the user's history, empty if the user is unknown.
    async fn snapshot(&self, user: UserId) -> Vec<Turn>;
}

/// Process-local history store backed by a `HashMap`.
///
/// All histories are lost on restart, which also re-arms persona seeding.
pub struct InMemoryHistory {
    persona: String,
    inner: Mutex<HashMap<UserId, Vec<Turn>>>,
}

impl InMemoryHistory {
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            inner: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistory {
    async fn get_or_create(&self, user: UserId) -> Vec<Turn> {
        let mut map = self.inner.lock().await;
        map.entry(user)
            .or_insert_with(|| vec![Turn::new(Role::System, self.persona.clone())])
            .clone()
    }

    async fn append(&self, user: UserId, role: Role, content: &str) {
        let mut map = self.inner.lock().await;
        map.entry(user).or_default().push(Turn::new(role, content));
    }

    async fn trim(&self, user: UserId, max_len: usize) {
        let mut map = self.inner.lock().await;
        let Some(turns) = map.get_mut(&user) else {
            return;
        };
        if turns.len() > max_len {
            let excess = turns.len() - max_len;
            turns.drain(..excess);
        }
    }

    async fn clear(&self, user: UserId) {
        let mut map = self.inner.lock().await;
        map.insert(user, Vec::new());
    }

    async fn snapshot(&self, user: UserId) -> Vec<Turn> {
        let map = self.inner.lock().await;
        map.get(&user).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId(7);

    #[tokio::test]
    async fn seeds_persona_once_per_user() {
        let store = InMemoryHistory::new("persona");

        let first = store.get_or_create(USER).await;
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].role, Role::System);
        assert_eq!(first[0].content, "persona");

        store.append(USER, Role::User, "hi").await;
        let second = store.get_or_create(USER).await;
        assert_eq!(second.len(), 2, "existing history must not be reseeded");
    }

    #[tokio::test]
    async fn clear_leaves_present_empty_entry() {
        let store = InMemoryHistory::new("persona");
        store.get_or_create(USER).await;
        store.append(USER, Role::User, "hi").await;

        store.clear(USER).await;
        assert!(store.snapshot(USER).await.is_empty());

        // A cleared entry still exists, so the next lookup must not reseed.
        let after = store.get_or_create(USER).await;
        assert!(after.is_empty(), "clear must disable persona reseeding");
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = InMemoryHistory::new("persona");
        store.clear(USER).await;
        store.clear(USER).await;
        assert!(store.snapshot(USER).await.is_empty());
    }

    #[tokio::test]
    async fn trim_keeps_last_turns_in_order() {
        let store = InMemoryHistory::new("persona");
        for i in 0..25 {
            store.append(USER, Role::User, &format!("turn {i}")).await;
        }

        store.trim(USER, 20).await;

        let turns = store.snapshot(USER).await;
        assert_eq!(turns.len(), 20);
        assert_eq!(turns[0].content, "turn 5");
        assert_eq!(turns[19].content, "turn 24");
    }

    #[tokio::test]
    async fn trim_below_cap_is_a_no_op() {
        let store = InMemoryHistory::new("persona");
        store.append(USER, Role::User, "only").await;

        store.trim(USER, 20).await;
        store.trim(UserId(999), 20).await; // unknown user

        assert_eq!(store.snapshot(USER).await.len(), 1);
    }

    #[tokio::test]
    async fn append_without_seed_creates_entry() {
        let store = InMemoryHistory::new("persona");
        store.append(USER, Role::Assistant, "reply").await;

        let turns = store.snapshot(USER).await;
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, Role::Assistant);
    }
}
