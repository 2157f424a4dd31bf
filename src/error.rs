//! Error types for the reported-errors UI.

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Returned by [`MailClient`](crate::mail::MailClient) implementations when
    /// the platform mail handler refuses the `mailto:` navigation.
    #[error("Mail client error: {0}")]
    MailClient(String),

    /// A page location could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL has no tuple origin (e.g. `data:` or `file:`).
    #[error("URL has no usable origin: {0}")]
    OpaqueOrigin(String),

    /// Configuration could not be loaded, or the command line was invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
