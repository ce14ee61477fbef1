//! # Sanitize
//!
//! Textual escaping applied to every identifier and literal before it is
//! interpolated into statement text. This is not parameter binding: the same
//! escaping is used for identifiers and for values.

/// Sanitize text
///
/// Trims surrounding whitespace, backslash-escapes the characters that would
/// terminate a quoted literal, then encodes html-significant characters.
///
/// The function is not idempotent, sanitizing an already sanitized string
/// escapes it a second time.
///
/// # Examples
///
/// ```
/// use sqlchain_query::sanitize;
///
/// assert_eq!(sanitize("  users "), "users");
/// assert_eq!(sanitize("a'b&c"), "a\\&#039;b&amp;c");
/// assert_eq!(sanitize("<b>"), "&lt;b&gt;");
/// ```
pub fn sanitize(text: &str) -> String {
    encode_entities(&add_slashes(text.trim()))
}

fn add_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\'' | '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\0' => out.push_str("\\0"),
            _ => out.push(ch),
        }
    }

    out
}

fn encode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }

    out
}
