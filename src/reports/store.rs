//! In-memory storage of reported-error threads.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use super::message::{MessageStatus, ReportedErrorMessage};

/// Thread-safe store of message threads, keyed by bot UUID.
///
/// Messages keep insertion order; the renderer relies on it.
#[derive(Debug, Clone)]
pub struct ThreadStore {
    inner: Arc<ThreadStoreInner>,
}

#[derive(Debug)]
struct ThreadStoreInner {
    threads: RwLock<HashMap<String, Vec<ReportedErrorMessage>>>,
}

impl Default for ThreadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ThreadStoreInner {
                threads: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Append a new message to the thread of `bot_uuid` and return it.
    pub fn append(
        &self,
        bot_uuid: &str,
        author: impl Into<String>,
        note: impl Into<String>,
        chat_id: Option<String>,
        status: MessageStatus,
    ) -> ReportedErrorMessage {
        let message = ReportedErrorMessage {
            id: Some(Uuid::new_v4().to_string()),
            author: author.into(),
            note: note.into(),
            created_at: Utc::now(),
            timezone_correction: None,
            status,
            chat_id,
        };
        self.push(bot_uuid, message.clone());
        message
    }

    /// Append an already-built message.
    pub fn push(&self, bot_uuid: &str, message: ReportedErrorMessage) {
        let mut guard = self.inner.threads.write().unwrap();
        guard.entry(bot_uuid.to_string()).or_default().push(message);
    }

    /// Snapshot of the thread for `bot_uuid`, empty if unknown.
    #[must_use]
    pub fn messages(&self, bot_uuid: &str) -> Vec<ReportedErrorMessage> {
        let guard = self.inner.threads.read().unwrap();
        guard.get(bot_uuid).cloned().unwrap_or_default()
    }

    /// Find a message by ID.
    #[must_use]
    pub fn get(&self, bot_uuid: &str, id: &str) -> Option<ReportedErrorMessage> {
        let guard = self.inner.threads.read().unwrap();
        guard
            .get(bot_uuid)?
            .iter()
            .find(|m| m.id.as_deref() == Some(id))
            .cloned()
    }

    /// Update the status of a message, returning the updated record.
    pub fn set_status(
        &self,
        bot_uuid: &str,
        id: &str,
        status: MessageStatus,
    ) -> Option<ReportedErrorMessage> {
        let mut guard = self.inner.threads.write().unwrap();
        let message = guard
            .get_mut(bot_uuid)?
            .iter_mut()
            .find(|m| m.id.as_deref() == Some(id))?;
        message.status = status;
        Some(message.clone())
    }

    /// Update the status of the message at `index`, returning the updated record.
    pub fn set_status_at(
        &self,
        bot_uuid: &str,
        index: usize,
        status: MessageStatus,
    ) -> Option<ReportedErrorMessage> {
        let mut guard = self.inner.threads.write().unwrap();
        let message = guard.get_mut(bot_uuid)?.get_mut(index)?;
        message.status = status;
        Some(message.clone())
    }

    /// Number of threads with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.threads.read().unwrap().len()
    }

    /// Check if the store holds no threads.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let store = ThreadStore::new();
        assert!(store.is_empty());

        store.append("bot-1", "a@x.io", "first", None, MessageStatus::Success);
        store.append("bot-1", "b@x.io", "second", None, MessageStatus::Success);
        store.append("bot-2", "a@x.io", "other", None, MessageStatus::Success);

        let notes: Vec<_> = store
            .messages("bot-1")
            .into_iter()
            .map(|m| m.note)
            .collect();
        assert_eq!(notes, ["first", "second"]);
        assert_eq!(store.len(), 2);
        assert!(store.messages("unknown").is_empty());
    }

    #[test]
    fn test_set_status() {
        let store = ThreadStore::new();
        let message = store.append("bot-1", "a@x.io", "hi", None, MessageStatus::Error);
        let id = message.id.unwrap();

        let updated = store.set_status("bot-1", &id, MessageStatus::Success).unwrap();
        assert_eq!(updated.status, MessageStatus::Success);
        assert_eq!(
            store.get("bot-1", &id).map(|m| m.status),
            Some(MessageStatus::Success)
        );

        assert!(store.set_status("bot-1", "missing", MessageStatus::Success).is_none());
        assert!(store.set_status("bot-9", &id, MessageStatus::Success).is_none());
    }

    #[test]
    fn test_set_status_at() {
        let store = ThreadStore::new();
        store.append("bot-1", "a@x.io", "first", None, MessageStatus::Success);
        store.push(
            "bot-1",
            ReportedErrorMessage {
                id: None,
                author: "a@x.io".to_string(),
                note: "unsaved".to_string(),
                created_at: Utc::now(),
                timezone_correction: None,
                status: MessageStatus::Error,
                chat_id: None,
            },
        );

        let updated = store.set_status_at("bot-1", 1, MessageStatus::Pending).unwrap();
        assert_eq!(updated.note, "unsaved");
        assert_eq!(store.messages("bot-1")[1].status, MessageStatus::Pending);
        assert_eq!(store.messages("bot-1")[0].status, MessageStatus::Success);

        assert!(store.set_status_at("bot-1", 2, MessageStatus::Success).is_none());
        assert!(store.set_status_at("bot-9", 0, MessageStatus::Success).is_none());
    }
}
