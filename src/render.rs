//! Format dispatch.
//!
//! Each [`Format`] maps to one rendering strategy behind the [`Render`]
//! trait. Blank input never reaches a strategy.

use crate::constants::markup;
use crate::error::{Error, Result};
use crate::html;
use crate::leipzig;
use crate::types::{Format, Sanitize};

/// A strategy that turns raw interlinear text into HTML.
pub trait Render {
    /// Render the text.
    fn render(&self, text: &str) -> Result<String>;
}

/// Preformatted rendering: the text is shown exactly as typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Monospace {
    /// Treatment of characters that are unsafe in HTML.
    pub sanitize: Sanitize,
}

impl Render for Monospace {
    fn render(&self, text: &str) -> Result<String> {
        let body = match self.sanitize {
            Sanitize::Escape => html::escape(text),
            Sanitize::Reject => {
                if let Some(character) = html::find_unsafe(text) {
                    return Err(Error::Unsanitized { character });
                }
                text.into()
            }
        };
        Ok(format!("{}{body}{}", markup::PRE_OPEN, markup::PRE_CLOSE))
    }
}

/// Word-aligned rendering following the Leipzig Glossing Rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leipzig;

impl Render for Leipzig {
    fn render(&self, text: &str) -> Result<String> {
        leipzig::render_text(text)
    }
}

/// Renders text in a chosen format with a chosen sanitization policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
    format: Format,
    sanitize: Sanitize,
}

impl Renderer {
    /// Create a renderer for the given format, escaping unsafe characters.
    pub const fn new(format: Format) -> Self {
        Self { format, sanitize: Sanitize::Escape }
    }

    /// Set the sanitization policy used by monospace rendering.
    #[must_use]
    pub const fn with_sanitize(mut self, sanitize: Sanitize) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// The format this renderer produces.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The sanitization policy this renderer applies.
    pub const fn sanitize(&self) -> Sanitize {
        self.sanitize
    }
}

impl Render for Renderer {
    fn render(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }
        match self.format {
            Format::Monospace => Monospace { sanitize: self.sanitize }.render(text),
            Format::Leipzig => Leipzig.render(text),
        }
    }
}

/// Return an HTML rendering of an interlinear, escaping unsafe characters.
///
/// Empty or all-whitespace text renders as the empty string.
pub fn make_html(text: &str, format: Format) -> Result<String> {
    Renderer::new(format).render(text)
}
