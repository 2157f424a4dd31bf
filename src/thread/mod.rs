//! Message thread renderer.
//!
//! Renders a reported-error thread as chat bubbles for one viewer.
//!
//! - [`view`]: which bubbles to draw and how retries are dispatched
//! - [`scroll`]: when to scroll to the newest message
//! - [`render`]: HTML output
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use reported_errors_ui::reports::{MessageStatus, ReportedErrorMessage, Viewer};
//! use reported_errors_ui::thread::MessageThread;
//!
//! let messages = vec![ReportedErrorMessage {
//!     id: None,
//!     author: "me@example.com".to_string(),
//!     note: "It stopped recording".to_string(),
//!     created_at: Utc::now(),
//!     timezone_correction: None,
//!     status: MessageStatus::Success,
//!     chat_id: Some("c-1".to_string()),
//! }];
//! let viewer = Viewer::new("me@example.com");
//! let thread = MessageThread::new(&messages, &viewer, "https://chat.example.com", |_| {});
//!
//! assert_eq!(thread.bubble_count(), 2);
//! ```

pub mod render;
pub mod scroll;
pub mod view;

pub use render::{RenderOptions, THREAD_ELEMENT_ID, render_thread};
pub use scroll::{SCROLL_EVENT, ScrollAnchor, ScrollHost, ScrollRequest};
pub use view::{
    Bubble, CHAT_PERSONA, LinkedChatBubble, MessageThread, OwnFooter, SYSTEM_NOTE_PREFIX,
    ThreadEntry,
};
