//! UI components and layouts.
//!
//! Server-rendered HTML following ShadCN-UI design principles. Components
//! return strings; HTMX attributes and small inline scripts carry the
//! browser-side behavior.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`html`]: Escaping helpers
//! - [`shell`]: Page shell

pub mod components;
pub mod html;
pub mod shell;
