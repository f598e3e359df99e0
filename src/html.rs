//! HTML escaping helpers.

use std::borrow::Cow;

/// Characters the strict monospace policy refuses to pass through.
const UNSAFE_CHARS: &[char] = &['<', '>', '"', '\''];

/// Escape `&`, `<`, `>`, `"` and `'` for inclusion in HTML text or attributes.
///
/// Borrows the input when nothing needs escaping.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Find the first character that would change meaning if emitted unescaped.
///
/// A bare `&` is tolerated since it cannot open markup.
pub fn find_unsafe(text: &str) -> Option<char> {
    text.chars().find(|c| UNSAFE_CHARS.contains(c))
}
