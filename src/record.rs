//! Stored interlinear with its cached HTML.
//!
//! Holds the raw text, the chosen format and the HTML produced for them, so
//! a web layer can serve the HTML without rendering on every request.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{Render, Renderer};
use crate::types::{Format, Sanitize};

/// A persisted interlinear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterlinearRecord {
    /// Interlinear as typed by the user.
    #[serde(default)]
    pub raw_text: String,

    /// HTML last rendered from `raw_text`.
    #[serde(default)]
    pub rendered_html: String,

    /// Format `raw_text` is rendered in.
    #[serde(default)]
    pub format: Format,
}

impl InterlinearRecord {
    /// Create a record that has not been rendered yet.
    pub fn new(raw_text: impl Into<String>, format: Format) -> Self {
        Self {
            raw_text: raw_text.into(),
            rendered_html: String::new(),
            format,
        }
    }

    /// Render the current text in the current format.
    pub fn render(&self) -> Result<String> {
        self.render_with(Sanitize::Escape)
    }

    /// Render the current text with an explicit sanitization policy.
    pub fn render_with(&self, sanitize: Sanitize) -> Result<String> {
        Renderer::new(self.format).with_sanitize(sanitize).render(&self.raw_text)
    }

    /// Refresh the cached HTML before the record is stored.
    ///
    /// Empty output leaves the previous HTML in place.
    pub fn prepare_save(&mut self) -> Result<()> {
        let html = self.render()?;
        if html.is_empty() {
            tracing::debug!("Rendered HTML is empty, keeping cached HTML");
        } else {
            self.rendered_html = html;
        }
        Ok(())
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Refresh the cached HTML and write the record to a JSON file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.prepare_save()?;
        let json = self.to_json()?;
        fs_err::write(path, json)?;
        Ok(())
    }

    /// Read a record from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs_err::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_prepare_save_renders() {
        let mut record = InterlinearRecord::new("a b\n1 2", Format::Leipzig);
        record.prepare_save().unwrap();
        assert!(record.rendered_html.starts_with("<div class=\"interlinear\">"));
    }

    #[test]
    fn test_prepare_save_keeps_html_for_empty_text() {
        let mut record = InterlinearRecord::new("a<b", Format::Monospace);
        record.prepare_save().unwrap();
        assert_eq!(record.rendered_html, "<pre>a&lt;b</pre>");

        record.raw_text.clear();
        record.prepare_save().unwrap();
        assert_eq!(record.rendered_html, "<pre>a&lt;b</pre>");
    }

    #[test]
    fn test_prepare_save_propagates_errors() {
        let mut record = InterlinearRecord::new("a b c\n1 2", Format::Leipzig);
        assert!(matches!(record.prepare_save(), Err(Error::TokenCountMismatch { .. })));
        assert!(record.rendered_html.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let record = InterlinearRecord::from_json(r#"{"raw_text": "x"}"#).unwrap();
        assert_eq!(record.format, Format::Monospace);
        assert!(record.rendered_html.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let mut record = InterlinearRecord::new("a b\n1 2\n'free'", Format::Leipzig);
        record.save(&path).unwrap();

        let loaded = InterlinearRecord::load(&path).unwrap();
        assert_eq!(loaded, record);
        assert!(loaded.rendered_html.contains("<p>'free'</p>"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        match InterlinearRecord::load(&path) {
            Err(err @ Error::Io(_)) => {
                assert!(err.to_string().contains(&path.display().to_string()));
            }
            other => panic!("Expected Io error naming the path, got {other:?}"),
        }
    }
}
