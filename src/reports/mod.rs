//! Reported-error threads: message records, timestamps and storage.
//!
//! A thread is the conversation attached to one reported bot error. Each
//! record is owned by the caller; the UI layers only read them.
//!
//! # Architecture
//!
//! - [`ReportedErrorMessage`]: a single note in a thread
//! - [`Viewer`]: identity of whoever is looking at the thread
//! - [`ThreadStore`]: thread-safe in-memory store keyed by bot UUID
//!
//! # Example
//!
//! ```rust
//! use reported_errors_ui::reports::{MessageStatus, ThreadStore};
//!
//! let store = ThreadStore::new();
//! let message = store.append("bot-1", "alice@example.com", "It crashed", None, MessageStatus::Success);
//!
//! assert_eq!(store.messages("bot-1").len(), 1);
//! assert!(message.id.is_some());
//! ```

mod message;
mod store;
mod timestamp;

pub use message::{MessageStatus, ReportedErrorMessage, Viewer};
pub use store::ThreadStore;
pub use timestamp::{TIMESTAMP_FORMAT, format_created_at};
