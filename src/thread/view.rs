//! View model of a message thread.
//!
//! [`MessageThread`] turns caller-owned records into [`ThreadEntry`] values
//! that say exactly which bubbles to draw. It never mutates the records.

use crate::reports::{MessageStatus, ReportedErrorMessage, Viewer, format_created_at};

/// Prefix the backend puts on the first note of a report. Hidden from the
/// viewer's own bubbles.
pub const SYSTEM_NOTE_PREFIX: &str = "User reported an error. Additional context:";

/// Author shown on linked-chat bubbles.
pub const CHAT_PERSONA: &str = "BaaS Chat";

/// Linked-chat sentence, before the link.
pub const LINKED_CHAT_LEAD: &str = "Your issue has been raised. In the meantime, we have created \
                                    an AI chat for you to understand the lifecycle of your bot. \
                                    Click this";

/// Linked-chat sentence, after the link.
pub const LINKED_CHAT_TAIL: &str = "to open it.";

/// Footer of one of the viewer's own bubbles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnFooter {
    /// Delivery in progress.
    Spinner,
    /// Delivered at the formatted time.
    Timestamp(String),
    /// Delivery failed; offers a retry.
    Retry,
}

/// The primary bubble of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bubble {
    /// Written by the viewer: right-aligned, primary styling.
    Own {
        /// Note with [`SYSTEM_NOTE_PREFIX`] removed.
        text: String,
        /// Status-dependent footer.
        footer: OwnFooter,
        /// Inline error indicator next to the bubble.
        error_indicator: bool,
    },
    /// Written by someone else: left-aligned, secondary styling.
    Other {
        /// Author identity.
        author: String,
        /// Upper-cased first character of the author, empty if none.
        initial: String,
        /// Note as written.
        text: String,
        /// Formatted creation time.
        timestamp: String,
    },
}

/// Informational bubble pointing at a linked external chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedChatBubble {
    /// Persona the bubble is attributed to.
    pub persona: &'static str,
    /// `{chat_base_url}/chat/{chat_id}`, opened in a new context.
    pub href: String,
    /// Formatted creation time of the carrying message.
    pub timestamp: String,
}

/// Everything drawn for one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadEntry {
    /// Position in the input sequence.
    pub index: usize,
    /// Message ID, if the backend assigned a non-empty one.
    pub id: Option<String>,
    /// Stable key: the message ID, or the index when the ID is missing or empty.
    pub key: String,
    /// Primary bubble, absent for blank notes.
    pub bubble: Option<Bubble>,
    /// Linked-chat bubble, present iff the message carries a chat ID.
    pub linked_chat: Option<LinkedChatBubble>,
}

impl ThreadEntry {
    /// Whether anything is drawn for this entry.
    pub fn is_visible(&self) -> bool {
        self.bubble.is_some() || self.linked_chat.is_some()
    }

    /// Whether the entry offers a retry action.
    pub fn has_retry(&self) -> bool {
        matches!(
            self.bubble,
            Some(Bubble::Own {
                footer: OwnFooter::Retry,
                ..
            })
        )
    }
}

/// A thread as seen by one viewer.
pub struct MessageThread<'a, R> {
    messages: &'a [ReportedErrorMessage],
    viewer: &'a Viewer,
    chat_base_url: &'a str,
    retry: R,
}

impl<R> std::fmt::Debug for MessageThread<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageThread")
            .field("messages", &self.messages.len())
            .field("viewer", &self.viewer)
            .field("chat_base_url", &self.chat_base_url)
            .finish()
    }
}

impl<'a, R> MessageThread<'a, R>
where
    R: Fn(&ReportedErrorMessage),
{
    /// Create a thread view.
    ///
    /// `retry` is called with the full record when the viewer retries a
    /// failed message; what a retry means is up to the caller.
    pub fn new(
        messages: &'a [ReportedErrorMessage],
        viewer: &'a Viewer,
        chat_base_url: &'a str,
        retry: R,
    ) -> Self {
        Self {
            messages,
            viewer,
            chat_base_url: chat_base_url.trim_end_matches('/'),
            retry,
        }
    }

    /// Number of input messages, including blank ones.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the thread has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// One entry per message, in input order.
    pub fn entries(&self) -> Vec<ThreadEntry> {
        self.messages
            .iter()
            .enumerate()
            .map(|(index, message)| self.entry(index, message))
            .collect()
    }

    /// Total number of bubbles drawn.
    pub fn bubble_count(&self) -> usize {
        self.entries()
            .iter()
            .map(|e| usize::from(e.bubble.is_some()) + usize::from(e.linked_chat.is_some()))
            .sum()
    }

    /// Retry the message at `index`.
    ///
    /// Returns `false` without calling back when that entry shows no retry
    /// action.
    pub fn retry(&self, index: usize) -> bool {
        let Some(message) = self.messages.get(index) else {
            return false;
        };
        if !self.entry(index, message).has_retry() {
            return false;
        }

        (self.retry)(message);
        true
    }

    fn entry(&self, index: usize, message: &ReportedErrorMessage) -> ThreadEntry {
        let timestamp = format_created_at(message.created_at, message.timezone_correction);

        let bubble = (!message.is_blank()).then(|| {
            if self.viewer.owns(message) {
                own_bubble(message, &timestamp)
            } else {
                Bubble::Other {
                    author: message.author.clone(),
                    initial: initial(&message.author),
                    text: message.note.clone(),
                    timestamp: timestamp.clone(),
                }
            }
        });

        let linked_chat = message.chat_id.as_ref().map(|chat_id| LinkedChatBubble {
            persona: CHAT_PERSONA,
            href: format!("{}/chat/{chat_id}", self.chat_base_url),
            timestamp: timestamp.clone(),
        });

        let id = message.id.clone().filter(|id| !id.is_empty());
        ThreadEntry {
            index,
            key: id.clone().unwrap_or_else(|| index.to_string()),
            id,
            bubble,
            linked_chat,
        }
    }
}

fn own_bubble(message: &ReportedErrorMessage, timestamp: &str) -> Bubble {
    let text = message
        .note
        .strip_prefix(SYSTEM_NOTE_PREFIX)
        .unwrap_or(&message.note)
        .to_string();

    let footer = match message.status {
        MessageStatus::Pending => OwnFooter::Spinner,
        MessageStatus::Success => OwnFooter::Timestamp(timestamp.to_string()),
        MessageStatus::Error => OwnFooter::Retry,
    };

    Bubble::Own {
        text,
        footer,
        error_indicator: message.status == MessageStatus::Error,
    }
}

fn initial(author: &str) -> String {
    author
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;

    const ME: &str = "me@example.com";

    fn message(author: &str, note: &str, status: MessageStatus) -> ReportedErrorMessage {
        ReportedErrorMessage {
            id: None,
            author: author.to_string(),
            note: note.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap(),
            timezone_correction: None,
            status,
            chat_id: None,
        }
    }

    fn noop(_: &ReportedErrorMessage) {}

    #[test]
    fn test_own_message_strips_system_prefix() {
        let messages = vec![message(
            ME,
            &format!("{SYSTEM_NOTE_PREFIX}X"),
            MessageStatus::Success,
        )];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "https://chat.example.com", noop);

        let entries = thread.entries();
        assert_eq!(
            entries[0].bubble,
            Some(Bubble::Own {
                text: "X".to_string(),
                footer: OwnFooter::Timestamp("Mar 4, 2025 14:05".to_string()),
                error_indicator: false,
            })
        );
    }

    #[test]
    fn test_prefix_kept_for_other_authors() {
        let note = format!("{SYSTEM_NOTE_PREFIX}X");
        let messages = vec![message("support@example.com", &note, MessageStatus::Success)];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);

        match &thread.entries()[0].bubble {
            Some(Bubble::Other {
                text,
                initial,
                author,
                timestamp,
            }) => {
                assert_eq!(text, &note);
                assert_eq!(initial, "S");
                assert_eq!(author, "support@example.com");
                assert_eq!(timestamp, "Mar 4, 2025 14:05");
            }
            other => panic!("unexpected bubble {other:?}"),
        }
    }

    #[test]
    fn test_status_footers() {
        let messages = vec![
            message(ME, "a", MessageStatus::Pending),
            message(ME, "b", MessageStatus::Success),
            message(ME, "c", MessageStatus::Error),
        ];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);
        let entries = thread.entries();

        let footers: Vec<_> = entries
            .iter()
            .map(|e| match &e.bubble {
                Some(Bubble::Own {
                    footer,
                    error_indicator,
                    ..
                }) => (footer.clone(), *error_indicator),
                other => panic!("unexpected bubble {other:?}"),
            })
            .collect();

        assert_eq!(
            footers,
            [
                (OwnFooter::Spinner, false),
                (OwnFooter::Timestamp("Mar 4, 2025 14:05".to_string()), false),
                (OwnFooter::Retry, true),
            ]
        );
    }

    #[test]
    fn test_retry_receives_exact_record() {
        let mut failed = message(ME, "c", MessageStatus::Error);
        failed.id = Some("m-3".to_string());
        failed.timezone_correction = Some(1.0);
        let messages = vec![message(ME, "a", MessageStatus::Success), failed.clone()];
        let viewer = Viewer::new(ME);

        let seen = RefCell::new(Vec::new());
        let thread = MessageThread::new(&messages, &viewer, "", |m: &ReportedErrorMessage| {
            seen.borrow_mut().push(m.clone());
        });

        assert!(!thread.retry(0));
        assert!(thread.retry(1));
        assert!(!thread.retry(7));
        assert_eq!(*seen.borrow(), [failed]);
    }

    #[test]
    fn test_other_errors_have_no_retry() {
        let messages = vec![message("them@example.com", "x", MessageStatus::Error)];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", |_: &ReportedErrorMessage| {
            panic!("retry must not be called");
        });

        assert!(!thread.entries()[0].has_retry());
        assert!(!thread.retry(0));
    }

    #[test]
    fn test_blank_notes_and_linked_chats() {
        let mut blank_with_chat = message(ME, "  ", MessageStatus::Success);
        blank_with_chat.chat_id = Some("c1".to_string());
        let mut other_with_chat = message("them@example.com", "hello", MessageStatus::Success);
        other_with_chat.chat_id = Some("c2".to_string());
        let messages = vec![
            message(ME, "", MessageStatus::Success),
            blank_with_chat,
            other_with_chat,
            message(ME, "visible", MessageStatus::Success),
        ];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "https://chat.example.com/", noop);
        let entries = thread.entries();

        assert!(!entries[0].is_visible());
        assert!(entries[1].bubble.is_none());
        assert_eq!(
            entries[1].linked_chat.as_ref().map(|c| c.href.as_str()),
            Some("https://chat.example.com/chat/c1")
        );
        assert_eq!(entries[2].linked_chat.as_ref().map(|c| c.persona), Some(CHAT_PERSONA));
        assert_eq!(thread.bubble_count(), 2 + 2);
        assert_eq!(thread.len(), 4);
    }

    #[test]
    fn test_keys_fall_back_to_index() {
        let mut with_id = message(ME, "a", MessageStatus::Success);
        with_id.id = Some("m-1".to_string());
        let mut empty_id = message(ME, "b", MessageStatus::Success);
        empty_id.id = Some(String::new());
        let messages = vec![with_id, empty_id, message(ME, "c", MessageStatus::Success)];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);

        let keys: Vec<_> = thread.entries().into_iter().map(|e| (e.key, e.id)).collect();
        assert_eq!(
            keys,
            [
                ("m-1".to_string(), Some("m-1".to_string())),
                ("1".to_string(), None),
                ("2".to_string(), None),
            ]
        );
    }

    #[test]
    fn test_huge_timezone_correction_does_not_panic() {
        let mut skewed = message("them@example.com", "hello", MessageStatus::Success);
        skewed.timezone_correction = Some(1e10);
        skewed.chat_id = Some("c1".to_string());
        let messages = vec![skewed];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);

        let entries = thread.entries();
        match &entries[0].bubble {
            Some(Bubble::Other { timestamp, .. }) => assert_eq!(timestamp, "Mar 4, 2025 14:05"),
            other => panic!("unexpected bubble {other:?}"),
        }
        assert_eq!(
            entries[0].linked_chat.as_ref().map(|c| c.timestamp.as_str()),
            Some("Mar 4, 2025 14:05")
        );
    }

    #[test]
    fn test_all_blank_renders_nothing() {
        let messages = vec![
            message(ME, "", MessageStatus::Success),
            message("x@example.com", "\n", MessageStatus::Error),
        ];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);
        assert_eq!(thread.bubble_count(), 0);
    }

    #[test]
    fn test_anonymous_viewer_owns_nothing() {
        let messages = vec![message("", "note", MessageStatus::Error)];
        let viewer = Viewer::anonymous();
        let thread = MessageThread::new(&messages, &viewer, "", noop);

        match &thread.entries()[0].bubble {
            Some(Bubble::Other { initial, .. }) => assert_eq!(initial, ""),
            other => panic!("unexpected bubble {other:?}"),
        }
    }

    #[test]
    fn test_entry_keys() {
        let mut with_id = message(ME, "a", MessageStatus::Success);
        with_id.id = Some("m-1".to_string());
        let messages = vec![with_id, message(ME, "b", MessageStatus::Success)];
        let viewer = Viewer::new(ME);
        let thread = MessageThread::new(&messages, &viewer, "", noop);

        let keys: Vec<_> = thread.entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, ["m-1", "1"]);
    }
}
