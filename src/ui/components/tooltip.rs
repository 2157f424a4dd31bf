//! Hover tooltip.

use crate::ui::html::escape;

/// Wrap `trigger` (trusted HTML) with a tooltip showing `content` on hover
/// or keyboard focus.
pub fn tooltip(trigger: &str, content: &str) -> String {
    format!(
        r#"<span class="group relative inline-flex">{trigger}<span role="tooltip" class="pointer-events-none absolute bottom-full left-1/2 z-50 mb-2 -translate-x-1/2 whitespace-nowrap rounded-md bg-primary px-3 py-1.5 text-xs text-primary-foreground opacity-0 transition-opacity group-hover:opacity-100 group-focus-within:opacity-100"><p>{}</p></span></span>"#,
        escape(content)
    )
}
