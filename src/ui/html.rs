//! HTML string helpers.

/// Escape untrusted text for use in element content or quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render extra `name="value"` attributes, escaping every value.
pub fn attributes(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!(r#" {name}="{}""#, escape(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn test_attributes() {
        assert_eq!(attributes(&[]), "");
        assert_eq!(
            attributes(&[("data-x", "1"), ("title", "a\"b")]),
            r#" data-x="1" title="a&quot;b""#
        );
    }
}
