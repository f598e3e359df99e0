//! Leipzig-style interlinear rendering.
//!
//! A text is cut into blank-line-separated blocks. Each block is either a
//! plain paragraph or a stack of lines with the same number of tokens, shown
//! as word-aligned columns, optionally followed by a quoted free translation.

pub mod aligned;
pub mod blocks;

pub use aligned::{paragraph, AlignedBlock, WordGroup};
pub use blocks::get_blocks;

use crate::constants::quotes::FINAL_LINE_MARKERS;
use crate::error::{Error, Result};

/// Render one or more blocks of interlinear plaintext as HTML.
///
/// Blocks are joined with a single newline. The first failing block aborts
/// the whole render.
pub fn render_text(text: &str) -> Result<String> {
    let blocks = get_blocks(text);
    let mut rendered = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        let html = render_block(block).inspect_err(|e| {
            tracing::warn!("Block {index} of {} failed to render: {e}", blocks.len());
        })?;
        rendered.push(html);
    }

    Ok(rendered.join("\n"))
}

/// Render a single block of interlinear plaintext as HTML.
///
/// Blank lines inside the block are ignored for alignment. A block with at
/// most one content line is not aligned; its text is wrapped in a paragraph
/// as written, blank lines included.
pub fn render_block(block: &str) -> Result<String> {
    let lines: Vec<&str> = block.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(Error::EmptyBlock);
    }

    let (content, caption) = split_final(&lines);
    if let Some(caption) = caption {
        tracing::debug!("Free translation detected: {caption}");
    }

    match (content, caption) {
        ([], _) | ([_], None) => {
            tracing::debug!("Single line block, not aligning");
            Ok(paragraph(block))
        }
        ([line], Some(caption)) => Ok(format!("{}{}", paragraph(line), paragraph(caption))),
        _ => Ok(AlignedBlock::from_lines(content, caption)?.to_html()),
    }
}

/// Separate a trailing free-translation line from the content lines.
pub fn split_final<'a, 'b>(lines: &'b [&'a str]) -> (&'b [&'a str], Option<&'a str>) {
    match lines.split_last() {
        Some((last, rest)) if is_final_line(last) => (rest, Some(*last)),
        _ => (lines, None),
    }
}

/// Whether a line's first token opens with a quote character.
pub fn is_final_line(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .and_then(|token| token.chars().next())
        .is_some_and(|c| FINAL_LINE_MARKERS.contains(&c))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_split_final() {
        let lines = ["asd ghg-jhjlk-jkljl", "A B-C-D", "\"dfdd jgjj hjkhjk jkhjkhjkh\""];
        let (content, caption) = split_final(&lines);
        assert_eq!(caption, Some("\"dfdd jgjj hjkhjk jkhjkhjkh\""));
        assert_eq!(content.len(), lines.len() - 1);
    }

    #[test]
    fn test_split_no_final() {
        let lines = ["asd ghg-jhjlk-jkljl", "A B-C-D"];
        let (content, caption) = split_final(&lines);
        assert_eq!(caption, None);
        assert_eq!(content.len(), lines.len());
    }

    #[test]
    fn test_every_quote_marks_a_final_line() {
        for quote in ["\"a\"", "'a'", "`a`", "«a»", "»a«"] {
            assert!(is_final_line(quote), "{quote} should be a final line");
        }
        assert!(is_final_line("   'indented'"));
        assert!(!is_final_line("a 'quoted' word"));
        assert!(!is_final_line(""));
    }

    #[test]
    fn test_empty_block() {
        assert!(matches!(render_block(""), Err(Error::EmptyBlock)));
        assert!(matches!(render_block("  \n\t\n"), Err(Error::EmptyBlock)));
    }

    #[test]
    fn test_single_line_block_wraps_original_text() {
        assert_eq!(render_block("a b c").unwrap(), "<p>a b c</p>\n");
        assert_eq!(render_block("'g jhgjhgjh'").unwrap(), "<p>'g jhgjhgjh'</p>\n");
    }

    #[test]
    fn test_content_line_with_caption_wraps_content_alone() {
        let html = render_block("a b c\n'free'").unwrap();
        assert_eq!(html, "<p>a b c</p>\n<p>'free'</p>\n");
    }

    #[test]
    fn test_inner_blank_lines_are_skipped() {
        let html = render_block("a b\n   \n1 2").unwrap();
        assert_eq!(html, render_block("a b\n1 2").unwrap());
    }

    #[test]
    fn test_unaligned_paragraph_keeps_inner_blank_lines() {
        assert_eq!(render_block("\n1 2").unwrap(), "<p>\n1 2</p>\n");
        assert_eq!(render_text("a b\n\n\n1 2").unwrap(), "<p>a b</p>\n\n<p>\n1 2</p>\n");
    }

    #[test]
    fn test_mismatch_aborts_text() {
        let err = render_text("a b\n1 2\n\na b c\n1 2").unwrap_err();
        assert!(matches!(err, Error::TokenCountMismatch { line: 1, expected: 3, actual: 2 }));
    }
}
