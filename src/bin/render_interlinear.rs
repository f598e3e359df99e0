//! Render an interlinear file (or stdin) to HTML.
//!
//! Usage:
//!   `cargo run --bin render_interlinear -- [--format leipzig] [--strict] [FILE]`
//!
//! Defaults come from `INTERLINEAR_FORMAT` and `INTERLINEAR_SANITIZE`.
//! Malformed input exits with status 2; other failures with status 1.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use interlinears::config::Config;
use interlinears::render::Render;
use interlinears::types::{Format, Sanitize};

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let mut renderer = config.renderer();
    let mut input: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let name = args.next().context("--format needs a value")?;
                let format: Format = name.parse()?;
                renderer = interlinears::Renderer::new(format).with_sanitize(renderer.sanitize());
            }
            "--strict" => renderer = renderer.with_sanitize(Sanitize::Reject),
            "-h" | "--help" => {
                eprintln!("Usage: render_interlinear [--format monospace|leipzig] [--strict] [FILE]");
                return Ok(());
            }
            _ if arg.starts_with('-') => bail!("Unknown option: {arg}"),
            _ => input = Some(PathBuf::from(shellexpand::tilde(&arg).as_ref())),
        }
    }

    let text = match &input {
        Some(path) => fs_err::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let html = match renderer.render(&text) {
        Ok(html) => html,
        Err(e) if e.is_input_error() => {
            eprintln!("Malformed {} interlinear: {e}", renderer.format());
            std::process::exit(2);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to render as {}", renderer.format())),
    };
    print!("{html}");
    Ok(())
}
