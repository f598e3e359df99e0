//! Core type definitions.
//!
//! Closed enumerations for the render format and the monospace
//! sanitization policy, replacing free-form format strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How raw interlinear text is turned into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Preformatted text, shown exactly as typed.
    #[default]
    Monospace,
    /// Word-aligned columns following the Leipzig Glossing Rules.
    Leipzig,
}

impl Format {
    /// Returns all format variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Monospace, Self::Leipzig]
    }

    /// Returns the machine name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monospace => "monospace",
            Self::Leipzig => "leipzig",
        }
    }

    /// Returns the human-readable description of this format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monospace => "WYSIWYG monospace",
            Self::Leipzig => "Leipzig Glossing Rules",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// What monospace rendering does with characters that are unsafe in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sanitize {
    /// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
    #[default]
    Escape,
    /// Fail on `<`, `>`, `"` or `'`; the caller must sanitize beforehand.
    Reject,
}

impl Sanitize {
    /// Returns the machine name of this policy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Escape => "escape",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for Sanitize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sanitize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "escape" => Ok(Self::Escape),
            "reject" | "strict" => Ok(Self::Reject),
            _ => Err(Error::config(
                format!("unknown sanitize policy {s:?}"),
                "Use \"escape\" or \"reject\"",
            )),
        }
    }
}
