//! ShadCN-style reusable UI components.
//!
//! Each component renders straight to an HTML string for server-side
//! responses. Text props are escaped; `children` arguments are trusted HTML
//! produced by other components.
//!
//! # Components
//!
//! - [`button`], [`link_button`]: Clickable button with variants
//! - [`avatar`]: Round avatar with fallback content
//! - [`scroll_area`]: Scrollable container with a marked viewport
//! - [`tooltip`]: Hover/focus tooltip
//! - icons: inline SVG icons

mod avatar;
mod button;
mod icons;
mod scroll_area;
mod tooltip;

pub use avatar::avatar;
pub use button::{ButtonProps, ButtonSize, ButtonVariant, button, link_button};
pub use icons::*;
pub use scroll_area::{SCROLL_VIEWPORT_ATTR, scroll_area};
pub use tooltip::tooltip;
