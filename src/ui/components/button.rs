//! Button component with variants and sizes.

use crate::ui::html::{attributes, escape};

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button.
    #[default]
    Primary,
    /// Link-style button.
    Link,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Link => "bg-transparent text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Medium button (default).
    #[default]
    Md,
    /// Sized by its content; used for inline link buttons.
    Inline,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "h-10 px-4 text-sm",
            Self::Inline => "h-auto p-0",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-md font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50";

/// Button properties.
#[derive(Debug, Clone, Default)]
pub struct ButtonProps<'a> {
    /// Button variant.
    pub variant: ButtonVariant,
    /// Button size.
    pub size: ButtonSize,
    /// Render as a form submit button.
    pub submit: bool,
    /// Additional CSS classes.
    pub class: &'a str,
    /// Extra attributes (HTMX, data-*, aria-*).
    pub attrs: &'a [(&'a str, &'a str)],
}

impl ButtonProps<'_> {
    fn classes(&self) -> String {
        format!(
            "{} {} {} {}",
            BASE_CLASSES,
            self.variant.classes(),
            self.size.classes(),
            self.class
        )
        .trim_end()
        .to_string()
    }
}

/// ShadCN-style `<button>`. `children` is trusted HTML.
///
/// # Example
///
/// ```rust
/// use reported_errors_ui::ui::components::{ButtonProps, ButtonVariant, button};
///
/// let html = button(
///     &ButtonProps { variant: ButtonVariant::Link, ..Default::default() },
///     "Retry",
/// );
/// assert!(html.contains(">Retry</button>"));
/// ```
pub fn button(props: &ButtonProps<'_>, children: &str) -> String {
    let button_type = if props.submit { "submit" } else { "button" };
    format!(
        r#"<button type="{button_type}" class="{}"{}>{children}</button>"#,
        escape(&props.classes()),
        attributes(props.attrs)
    )
}

/// An anchor styled as a button (`asChild` link).
pub fn link_button(props: &ButtonProps<'_>, href: &str, children: &str) -> String {
    format!(
        r#"<a href="{}" class="{}"{}>{children}</a>"#,
        escape(href),
        escape(&props.classes()),
        attributes(props.attrs)
    )
}
