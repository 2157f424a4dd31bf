//! Scrollable area component.

use crate::ui::html::{attributes, escape};

/// Attribute marking the element whose `scrollTop` is driven to the end.
pub const SCROLL_VIEWPORT_ATTR: &str = "data-scroll-viewport";

/// Scrollable container.
///
/// The outer element takes `class` and `attrs`; the inner viewport carries
/// [`SCROLL_VIEWPORT_ATTR`] so page scripts can find the element that
/// actually scrolls.
pub fn scroll_area(class: &str, attrs: &[(&str, &str)], children: &str) -> String {
    format!(
        r#"<div class="{}"{}><div {SCROLL_VIEWPORT_ATTR} class="h-full w-full overflow-y-auto scrollbar-thin scrollbar-track-transparent">{children}</div></div>"#,
        escape(&format!("relative overflow-hidden {class}")),
        attributes(attrs)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_is_marked() {
        let html = scroll_area("max-h-10", &[("id", "t")], "<p>x</p>");
        assert!(html.starts_with(r#"<div class="relative overflow-hidden max-h-10" id="t">"#));
        assert!(html.contains("<div data-scroll-viewport "));
        assert!(html.contains("<p>x</p></div></div>"));
    }
}
