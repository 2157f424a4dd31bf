//! Avatar component with a fallback badge.

/// Round avatar showing `fallback` (trusted HTML: initials or an icon).
///
/// # Example
///
/// ```rust
/// use reported_errors_ui::ui::components::avatar;
///
/// let html = avatar("J", "size-6");
/// assert!(html.contains(">J</span>"));
/// ```
pub fn avatar(fallback: &str, size: &str) -> String {
    format!(
        r#"<span class="relative flex shrink-0 overflow-hidden rounded-full {size}"><span class="flex h-full w-full items-center justify-center rounded-full bg-primary text-primary-foreground text-xs capitalize">{fallback}</span></span>"#
    )
}
