//! Deep-link and `mailto:` URI composition.
//!
//! Everything here is pure: the current page is passed in as a
//! [`PageLocation`] instead of being read from the browser.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{Url, form_urlencoded};

use crate::error::{Error, Result};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Default subject line of support emails.
pub const DEFAULT_SUBJECT: &str = "MeetingBaaS Support";

/// Default query key carrying the correlation identifier.
pub const DEFAULT_CORRELATION_KEY: &str = "bot_uuid";

/// Percent-encode `value` the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Return `query` with `key` set to `value`.
///
/// The first occurrence of `key` is replaced in place and any later
/// duplicates are dropped; if the key is absent it is appended. A leading
/// `?` is accepted. The result is form-urlencoded without a leading `?`.
pub fn with_query_param(query: &str, key: &str, value: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut found = false;
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        if k == key {
            if found {
                continue;
            }
            found = true;
            pairs.push((k.into_owned(), value.to_string()));
        } else {
            pairs.push((k.into_owned(), v.into_owned()));
        }
    }
    if !found {
        pairs.push((key.to_string(), value.to_string()));
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// The page a link is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme, host and port, e.g. `https://app.example.com`.
    pub origin: String,
    /// Path starting with `/`.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: String,
}

impl PageLocation {
    /// Build a location from its parts.
    pub fn new(
        origin: impl Into<String>,
        path: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        let query = query.into();
        Self {
            origin: origin.into(),
            path: path.into(),
            query: query.strip_prefix('?').unwrap_or(&query).to_string(),
        }
    }

    /// Parse an absolute URL.
    pub fn parse(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let origin = url.origin();
        if !origin.is_tuple() {
            return Err(Error::OpaqueOrigin(url.to_string()));
        }

        Ok(Self {
            origin: origin.ascii_serialization(),
            path: url.path().to_string(),
            query: url.query().unwrap_or_default().to_string(),
        })
    }

    /// Link back to this page with `key` set to `value` in the query.
    pub fn deep_link(&self, key: &str, value: &str) -> String {
        format!(
            "{}{}?{}",
            self.origin,
            self.path,
            with_query_param(&self.query, key, value)
        )
    }
}

/// Settings shared by every support email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// Subject line.
    pub subject: String,
    /// Query key the correlation identifier is stored under.
    pub correlation_key: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            correlation_key: DEFAULT_CORRELATION_KEY.to_string(),
        }
    }
}

/// A support email about one bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportEmail {
    /// Recipient address.
    pub recipient: String,
    /// Opaque identifier of the bot the email is about.
    pub correlation_id: String,
}

impl SupportEmail {
    /// Create a support email.
    pub fn new(recipient: impl Into<String>, correlation_id: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            correlation_id: correlation_id.into(),
        }
    }

    /// Deep link to `location` tagged with the correlation identifier.
    pub fn deep_link(&self, location: &PageLocation, settings: &MailSettings) -> String {
        location.deep_link(&settings.correlation_key, &self.correlation_id)
    }

    /// Unencoded email body.
    pub fn body(&self, deep_link: &str) -> String {
        format!(
            "Hi,\n\nI'm contacting you regarding your bot {} ({deep_link}).",
            self.correlation_id
        )
    }

    /// The full `mailto:` URI.
    pub fn mailto_uri(&self, location: &PageLocation, settings: &MailSettings) -> String {
        let link = self.deep_link(location, settings);
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&settings.subject),
            encode_component(&self.body(&link))
        )
    }
}
