//! Support email composition and the email contact trigger.
//!
//! # Example
//!
//! ```rust
//! use reported_errors_ui::mail::{MailSettings, PageLocation, SupportEmail};
//!
//! let location = PageLocation::new("https://app.example.com", "/logs", "page=2");
//! let email = SupportEmail::new("support@example.com", "bot-1");
//!
//! let uri = email.mailto_uri(&location, &MailSettings::default());
//! assert!(uri.starts_with("mailto:support@example.com?subject=MeetingBaaS%20Support&body="));
//! ```

mod link;
mod trigger;

pub use link::{
    DEFAULT_CORRELATION_KEY, DEFAULT_SUBJECT, MailSettings, PageLocation, SupportEmail,
    encode_component, with_query_param,
};
pub use trigger::{
    ClickEvent, EmailTrigger, MailClient, Notifier, OPEN_FAILED_MESSAGE, TRIGGER_HINT,
    TriggerOutcome,
};
