use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::domain::VirtualWindow;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base address of the product search endpoint
    pub api_base_url: String,

    /// Height of a single result row in pixels
    pub row_height: f64,

    /// Rows mounted above and below the visible window
    pub overscan: usize,

    /// Viewport height used until the real element has been measured
    pub viewport_height: f64,

    /// Per-request timeout for the search endpoint (in seconds)
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3333".to_string(),
            row_height: 30.0,
            overscan: 5,
            viewport_height: 480.0,
            request_timeout_secs: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            api_base_url: lookup("PRODUCT_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            row_height: parse_or(&lookup, "RESULT_ROW_HEIGHT", defaults.row_height, is_positive_length)?,
            overscan: parse_or(&lookup, "RESULT_OVERSCAN", defaults.overscan, |_| true)?,
            viewport_height: parse_or(&lookup, "RESULT_VIEWPORT_HEIGHT", defaults.viewport_height, is_positive_length)?,
            request_timeout_secs: parse_or(&lookup, "SEARCH_TIMEOUT_SECS", defaults.request_timeout_secs, |secs| *secs > 0)?,
        })
    }

    pub fn window(&self) -> VirtualWindow {
        VirtualWindow::new(self.row_height, self.overscan)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn is_positive_length(pixels: &f64) -> bool {
    pixels.is_finite() && *pixels > 0.0
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> Result<T, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().parse() {
        Ok(parsed) if valid(&parsed) => Ok(parsed),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
