//! Block splitting.
//!
//! Normalizes every line-ending convention to `\n` and cuts the text into
//! blocks on blank lines.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Regex matching one line ending of any convention (DOS, old Mac, UNIX).
#[allow(clippy::expect_used)]
static RE_LINE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|\r|\n").expect("valid regex: RE_LINE_END")
});

/// Separator between two blocks after normalization.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Rewrite `\r\n` and lone `\r` as `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    RE_LINE_END.replace_all(text, "\n")
}

/// Split text into blocks separated by blank lines.
///
/// Leading and trailing whitespace of the whole text is dropped first. Empty
/// text yields a single empty block, which the renderer rejects.
pub fn get_blocks(text: &str) -> Vec<String> {
    let normalized = normalize_line_endings(text.trim());
    normalized.split(BLOCK_SEPARATOR).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_get_blocks_any_line_separator() {
        let unix = "a\nb\n\nc\nd";
        let dos = "a\r\nb\r\n\r\nc\r\nd";
        let mac = "a\rb\r\rc\rd";

        assert_eq!(get_blocks(unix).len(), 2, "Failed to normalize UNIX");
        assert_eq!(get_blocks(dos).len(), 2, "Failed to normalize DOS");
        assert_eq!(get_blocks(mac).len(), 2, "Failed to normalize Mac");
    }

    #[test]
    fn test_blocks_keep_internal_newlines() {
        let blocks = get_blocks("a\r\nb\r\n\r\nc\r\nd");
        assert_eq!(blocks, vec!["a\nb".to_string(), "c\nd".to_string()]);
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        let blocks = get_blocks("\n\n  a b\n1 2\n\n\n");
        assert_eq!(blocks, vec!["a b\n1 2".to_string()]);
    }

    #[test]
    fn test_empty_text_is_one_empty_block() {
        assert_eq!(get_blocks(""), vec![String::new()]);
        assert_eq!(get_blocks(" \r\n "), vec![String::new()]);
    }

    #[test]
    fn test_get_blocks_is_deterministic() {
        let text = "x y\r\n1 2\r\r\"free\"\n\nz\n3";
        assert_eq!(get_blocks(text), get_blocks(text));
    }

    #[test]
    fn test_normalize_borrows_unix_text() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
        assert_eq!(normalize_line_endings("a\r\n\rb"), "a\n\nb");
    }
}
