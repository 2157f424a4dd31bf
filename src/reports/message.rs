//! Message records and viewer identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status of a message sent by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Still being delivered.
    Pending,
    /// Delivered.
    Success,
    /// Delivery failed; the viewer may retry.
    Error,
}

/// A single note in a reported-error thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedErrorMessage {
    /// Identifier assigned by the backend, absent for optimistic local messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Author identity (an email address).
    pub author: String,
    /// Free-text note.
    pub note: String,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Offset in hours applied when displaying `created_at`.
    #[serde(
        default,
        rename = "timezoneCorrection",
        skip_serializing_if = "Option::is_none"
    )]
    pub timezone_correction: Option<f64>,
    /// Delivery status.
    pub status: MessageStatus,
    /// Linked external chat, if the backend opened one for this report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

impl ReportedErrorMessage {
    /// Whether the note has no visible content.
    ///
    /// Blank notes are written by the backend when a report changes state
    /// and are never shown as a bubble.
    pub fn is_blank(&self) -> bool {
        self.note.trim().is_empty()
    }
}

/// The identity of whoever is viewing a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    /// Session email, `None` for anonymous viewers.
    pub email: Option<String>,
}

impl Viewer {
    /// Viewer with a known session email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
        }
    }

    /// Viewer without a session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether `message` was written by this viewer.
    ///
    /// Exact, case-sensitive comparison. Anonymous viewers own nothing.
    pub fn owns(&self, message: &ReportedErrorMessage) -> bool {
        self.email.as_deref() == Some(message.author.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn message(author: &str, note: &str) -> ReportedErrorMessage {
        ReportedErrorMessage {
            id: None,
            author: author.to_string(),
            note: note.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap(),
            timezone_correction: None,
            status: MessageStatus::Success,
            chat_id: None,
        }
    }

    #[test]
    fn test_blank_notes() {
        assert!(message("a@x.io", "").is_blank());
        assert!(message("a@x.io", " \n\t ").is_blank());
        assert!(!message("a@x.io", " hi ").is_blank());
    }

    #[test]
    fn test_ownership_is_exact() {
        let viewer = Viewer::new("alice@example.com");
        assert!(viewer.owns(&message("alice@example.com", "x")));
        assert!(!viewer.owns(&message("Alice@example.com", "x")));
        assert!(!viewer.owns(&message(" alice@example.com", "x")));
        assert!(!Viewer::anonymous().owns(&message("", "x")));
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "author": "bob@example.com",
            "note": "hello",
            "created_at": "2025-03-04T14:05:00Z",
            "timezoneCorrection": 2,
            "status": "error",
            "chat_id": "c-9"
        }"#;
        let parsed: ReportedErrorMessage = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, MessageStatus::Error);
        assert_eq!(parsed.timezone_correction, Some(2.0));
        assert_eq!(parsed.chat_id.as_deref(), Some("c-9"));
        assert_eq!(parsed.id, None);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["status"], "error");
        assert_eq!(back["timezoneCorrection"], 2.0);
        assert!(back.get("id").is_none());
    }
}
