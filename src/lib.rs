//! `Interlinears` - pretty-printing of linguistic interlinear glosses.
//!
//! Turns plaintext interlinears (a source line, a morpheme gloss line and an
//! optional quoted free translation) into HTML, either as preformatted text
//! or as word-aligned columns following the Leipzig Glossing Rules.
//!
//! ```
//! use interlinears::{make_html, Format};
//!
//! let html = make_html("ni-ta\n1SG-go", Format::Leipzig).unwrap();
//! assert!(html.contains("<div class=\"line\">1SG-go</div>"));
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod html;
pub mod leipzig;
pub mod record;
pub mod render;
pub mod types;

pub use error::{Error, Result};
pub use leipzig::{render_block, render_text};
pub use record::InterlinearRecord;
pub use render::{make_html, Render, Renderer};
pub use types::{Format, Sanitize};
