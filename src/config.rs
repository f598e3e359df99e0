//! Rendering configuration.
//!
//! Handles loading defaults from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::env as vars;
use crate::error::{Error, Result};
use crate::render::Renderer;
use crate::types::{Format, Sanitize};

/// Configuration for rendering interlinears.
#[derive(Debug, Clone)]
pub struct Config {
    /// The crate name
    app_name: String,
    /// The crate version
    app_version: String,
    /// Format used when the caller does not pick one
    pub format: Format,
    /// Sanitization policy for monospace rendering
    pub sanitize: Sanitize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            format: Format::default(),
            sanitize: Sanitize::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!(
            "Loaded {} {} config: format={}, sanitize={}",
            config.app_name,
            config.app_version,
            config.format,
            config.sanitize
        );
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup(vars::FORMAT).filter(|v| !v.trim().is_empty()) {
            config.format = format.parse().map_err(|_| {
                Error::config(
                    format!("{} has unknown value {format:?}", vars::FORMAT),
                    "Set it to \"monospace\" or \"leipzig\"",
                )
            })?;
        }

        if let Some(sanitize) = lookup(vars::SANITIZE).filter(|v| !v.trim().is_empty()) {
            config.sanitize = sanitize.parse()?;
        }

        Ok(config)
    }

    /// A renderer using the configured format and policy
    pub const fn renderer(&self) -> Renderer {
        Renderer::new(self.format).with_sanitize(self.sanitize)
    }
}
