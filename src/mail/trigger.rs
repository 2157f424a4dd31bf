//! Email contact trigger.
//!
//! Clicking the trigger opens the platform mail client with a support email
//! about one bot. The click never reaches ancestor handlers (the trigger is
//! usually rendered inside a clickable table row).

use tracing::{debug, error};

use super::link::{MailSettings, PageLocation, SupportEmail};
use crate::error::Result;
use crate::ui::components::tooltip;
use crate::ui::html::escape;

/// Notification shown when the mail client cannot be opened.
pub const OPEN_FAILED_MESSAGE: &str = "Failed to open email client";

/// Tooltip and title text of the trigger.
pub const TRIGGER_HINT: &str = "Click to send an email";

/// Hands a `mailto:` URI to the platform's default mail handler.
pub trait MailClient {
    /// Navigate to `uri`.
    fn open(&self, uri: &str) -> Result<()>;
}

/// Transient user-visible notifications.
pub trait Notifier {
    /// Show a short error message. Fire-and-forget.
    fn error(&self, message: &str);
}

/// A pointer activation delivered to the trigger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    propagation_stopped: bool,
}

impl ClickEvent {
    /// A fresh click that would bubble to ancestors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep ancestor click handlers from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether ancestors will still see this event.
    pub fn propagates(&self) -> bool {
        !self.propagation_stopped
    }
}

/// Result of activating the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The mail client accepted the URI.
    Opened(String),
    /// The mail client failed; the user was notified.
    Failed,
}

/// Clickable affordance that opens a prefilled support email.
#[derive(Debug, Clone)]
pub struct EmailTrigger {
    email: SupportEmail,
    settings: MailSettings,
    class: String,
}

impl EmailTrigger {
    /// Trigger mailing `recipient` about the bot `correlation_id`.
    pub fn new(
        recipient: impl Into<String>,
        correlation_id: impl Into<String>,
        settings: MailSettings,
    ) -> Self {
        Self {
            email: SupportEmail::new(recipient, correlation_id),
            settings,
            class: String::new(),
        }
    }

    /// Extra CSS classes for the button.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Recipient address.
    pub fn recipient(&self) -> &str {
        &self.email.recipient
    }

    /// The `mailto:` URI for a trigger shown on `location`.
    pub fn mailto_uri(&self, location: &PageLocation) -> String {
        self.email.mailto_uri(location, &self.settings)
    }

    /// Handle a click.
    ///
    /// Stops propagation, composes the URI and hands it to `client`. A
    /// client failure is logged and reported through `notifier`; it is not
    /// retried or returned as an error.
    pub fn activate(
        &self,
        event: &mut ClickEvent,
        location: &PageLocation,
        client: &dyn MailClient,
        notifier: &dyn Notifier,
    ) -> TriggerOutcome {
        event.stop_propagation();

        let uri = self.mailto_uri(location);
        match client.open(&uri) {
            Ok(()) => {
                debug!(
                    name: "mail.client.opened",
                    bot_uuid = %self.email.correlation_id,
                    "Opened email client"
                );
                TriggerOutcome::Opened(uri)
            }
            Err(e) => {
                error!(
                    name: "mail.client.failed",
                    bot_uuid = %self.email.correlation_id,
                    error = %e,
                    "Failed to open email client"
                );
                notifier.error(OPEN_FAILED_MESSAGE);
                TriggerOutcome::Failed
            }
        }
    }

    /// Render the trigger for a page at `location`.
    ///
    /// The URI is composed server-side and stored in `data-mailto`; the
    /// inline handler mirrors [`Self::activate`] in the browser.
    /// `children` is trusted HTML.
    pub fn render(&self, location: &PageLocation, children: &str) -> String {
        let class = format!("cursor-pointer text-sm hover:opacity-80 {}", self.class);
        let onclick = format!(
            "event.stopPropagation(); try {{ window.location.href = this.dataset.mailto; }} \
             catch (error) {{ console.error('{OPEN_FAILED_MESSAGE}:', error); \
             window.showToast && window.showToast('{OPEN_FAILED_MESSAGE}'); }}"
        );

        let trigger = format!(
            r#"<button type="button" class="{}" aria-label="{}" title="{TRIGGER_HINT}" data-mailto="{}" onclick="{}">{children}</button>"#,
            escape(class.trim_end()),
            escape(&format!("Send email to {}", self.email.recipient)),
            escape(&self.mailto_uri(location)),
            escape(&onclick),
        );

        tooltip(&trigger, TRIGGER_HINT)
    }
}
