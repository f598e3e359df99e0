//! Token alignment and HTML serialization of one interlinear block.

use crate::constants::markup;
use crate::error::{Error, Result};

/// Split a line into its whitespace-delimited tokens, dropping empty ones.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Tokenize every line, checking each against the first line's token count.
///
/// Stops at the first line whose count differs.
pub fn tokenize_lines<'a>(lines: &[&'a str]) -> Result<Vec<Vec<&'a str>>> {
    let seed: Vec<Vec<&'a str>> = Vec::with_capacity(lines.len());
    lines.iter().enumerate().try_fold(seed, |mut rows, (index, line)| {
        let tokens = tokenize(line);
        if let Some(first) = rows.first() {
            let expected = first.len();
            if tokens.len() != expected {
                return Err(Error::mismatch(index, expected, tokens.len()));
            }
        }
        rows.push(tokens);
        Ok(rows)
    })
}

/// Turn rows of tokens into columns.
///
/// Every row must have the same length; ragged input fails before any column
/// is built.
pub fn transpose<'a>(rows: &[Vec<&'a str>]) -> Result<Vec<WordGroup<'a>>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();

    if let Some((line, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(Error::mismatch(line, width, row.len()));
    }

    let mut columns = Vec::with_capacity(width);
    for column in 0..width {
        let tokens = rows.iter().map(|row| row[column]).collect();
        columns.push(WordGroup { tokens });
    }
    Ok(columns)
}

/// Wrap text in a paragraph.
pub fn paragraph(text: &str) -> String {
    format!("{}{text}{}", markup::PARA_OPEN, markup::PARA_CLOSE)
}

/// The tokens found at one column position, one per line, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> WordGroup<'a> {
    /// Tokens of this column in line order.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Render as a word `div` holding one line `div` per token.
    pub fn to_html(&self) -> String {
        let lines = self
            .tokens
            .iter()
            .map(|token| format!("{}{token}{}", markup::LINE_OPEN, markup::LINE_CLOSE))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}{lines}{}", markup::WORD_OPEN, markup::WORD_CLOSE)
    }
}

/// A validated block: word groups plus an optional free translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedBlock<'a> {
    words: Vec<WordGroup<'a>>,
    caption: Option<&'a str>,
}

impl<'a> AlignedBlock<'a> {
    /// Tokenize, validate and transpose the content lines of a block.
    pub fn from_lines(lines: &[&'a str], caption: Option<&'a str>) -> Result<Self> {
        let rows = tokenize_lines(lines)?;
        let words = transpose(&rows)?;
        Ok(Self { words, caption })
    }

    /// The word groups, left to right.
    pub fn word_groups(&self) -> &[WordGroup<'a>] {
        &self.words
    }

    /// The free-translation line, if the block had one.
    pub const fn caption(&self) -> Option<&'a str> {
        self.caption
    }

    /// Render the whole block inside an `interlinear` container.
    pub fn to_html(&self) -> String {
        let mut parts: Vec<String> = self.words.iter().map(WordGroup::to_html).collect();
        if let Some(caption) = self.caption.filter(|c| !c.is_empty()) {
            parts.push(paragraph(caption));
        }
        format!("{}{}{}", markup::WRAP_OPEN, parts.join("\n"), markup::WRAP_CLOSE)
    }
}
