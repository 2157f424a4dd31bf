//! Reported Errors UI
//!
//! Server-rendered views for user-reported bot errors: a support email
//! trigger and a chat-style viewer for the messages exchanged about an error.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving HTML pages and HTMX fragments
//! - **Views**: pure Rust view models rendered to HTML strings
//! - **UI**: ShadCN-style components + HTMX
//!
//! # Modules
//!
//! - [`mail`]: Support email composition and the email trigger
//! - [`reports`]: Message records and thread storage
//! - [`thread`]: Message thread renderer
//! - [`ui`]: Reusable components and page shell

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod mail;
pub mod reports;
pub mod server;
pub mod thread;
pub mod ui;

use crate::config::AppConfig;

use reports::ThreadStore;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reported-error threads.
    pub store: ThreadStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
