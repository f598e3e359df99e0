//! Rendering constants.
//!
//! The markup fragments are part of the output contract and must stay
//! byte-for-byte stable for stored HTML to remain comparable.

/// HTML fragments emitted by the Leipzig renderer.
pub mod markup {
    /// Opening of the outer container of one aligned block.
    pub const WRAP_OPEN: &str = "<div class=\"interlinear\">\n";

    /// Closing of the outer container.
    pub const WRAP_CLOSE: &str = "</div>\n";

    /// Opening of one word group.
    pub const WORD_OPEN: &str = "<div class=\"word\">\n";

    /// Closing of one word group, preceded by the newline after its last line.
    pub const WORD_CLOSE: &str = "\n</div>\n";

    /// Opening of one token line.
    pub const LINE_OPEN: &str = "<div class=\"line\">";

    /// Closing of one token line.
    pub const LINE_CLOSE: &str = "</div>";

    /// Opening of a paragraph (caption or unaligned block).
    pub const PARA_OPEN: &str = "<p>";

    /// Closing of a paragraph.
    pub const PARA_CLOSE: &str = "</p>\n";

    /// Opening of the monospace wrapper.
    pub const PRE_OPEN: &str = "<pre>";

    /// Closing of the monospace wrapper.
    pub const PRE_CLOSE: &str = "</pre>";
}

/// Free-translation detection.
pub mod quotes {
    /// Characters that mark a block's last line as a free translation.
    pub const FINAL_LINE_MARKERS: &[char] = &['"', '\'', '`', '«', '»'];
}

/// Environment variables read by the configuration loader.
pub mod env {
    /// Default render format.
    pub const FORMAT: &str = "INTERLINEAR_FORMAT";

    /// Monospace sanitization policy.
    pub const SANITIZE: &str = "INTERLINEAR_SANITIZE";
}
