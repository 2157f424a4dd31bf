//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements for optimal performance
//! and styling flexibility.

/// Common icon size class.
const ICON_SIZE: &str = "size-4";

fn svg(class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" class="{}">{body}</svg>"#,
        format!("{ICON_SIZE} {class}").trim_end()
    )
}

/// Loader/spinner icon.
pub fn loader_icon(class: &str) -> String {
    svg(
        &format!("animate-spin {class}"),
        r#"<path d="M21 12a9 9 0 1 1-6.219-8.56" />"#,
    )
}

/// Alert/error icon.
pub fn alert_circle_icon(class: &str) -> String {
    svg(
        class,
        r#"<circle cx="12" cy="12" r="10" /><line x1="12" x2="12" y1="8" y2="12" /><line x1="12" x2="12.01" y1="16" y2="16" />"#,
    )
}

/// Fish icon, the avatar of the support chat persona.
pub fn fish_icon(class: &str) -> String {
    svg(
        class,
        concat!(
            r#"<path d="M6.5 12c.94-3.46 4.94-6 8.5-6 3.56 0 6.06 2.54 7 6-.94 3.47-3.44 6-7 6s-7.56-2.53-8.5-6Z" />"#,
            r#"<path d="M18 12v.5" />"#,
            r#"<path d="M16 17.93a9.77 9.77 0 0 1 0-11.86" />"#,
            r#"<path d="M7 10.67C7 8 5.58 5.97 2.73 5.5c-1 1.5-1 5 .23 6.5-1.24 1.5-1.24 5-.23 6.5C5.58 18.03 7 16 7 13.33" />"#,
            r#"<path d="M10.46 7.26C10.2 5.88 9.17 4.24 8 3h5.8a2 2 0 0 1 1.98 1.67l.23 1.4" />"#,
            r#"<path d="m16.01 17.93-.23 1.4A2 2 0 0 1 13.8 21H9.5a5.4 5.4 0 0 0 1.72-3.07" />"#,
        ),
    )
}

/// Mail/envelope icon.
pub fn mail_icon(class: &str) -> String {
    svg(
        class,
        r#"<rect width="20" height="16" x="2" y="4" rx="2" /><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_spins() {
        let html = loader_icon("size-3");
        assert!(html.contains(r#"class="size-4 animate-spin size-3""#));
    }

    #[test]
    fn test_icon_without_extra_class() {
        assert!(mail_icon("").contains(r#"class="size-4""#));
    }
}
