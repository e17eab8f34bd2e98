//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// `ARTSTORE_API_URL` as seen by the running server. The client bundle
    /// reads its own copy at build time, so this is only compared against it.
    pub api_url: Option<String>,
    /// Overrides the Leptos `site-root` when set.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ARTSTORE_API_URL`: checked against the URL the client was built with
    /// - `SITE_ROOT`: directory holding the compiled `pkg/` assets
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not an
    /// integer in 1..=65535.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_url = non_empty(std::env::var("ARTSTORE_API_URL").ok());
        let site_root = non_empty(std::env::var("SITE_ROOT").ok()).map(PathBuf::from);
        Ok(Self { port, api_url, site_root })
    }

    /// The runtime `ARTSTORE_API_URL` when it disagrees with `built_with`, the
    /// URL compiled into the client bundle. Trailing slashes are ignored.
    pub fn stale_api_url(&self, built_with: &str) -> Option<&str> {
        let runtime = self.api_url.as_deref()?;
        (client::config::normalize_base_url(runtime) != client::config::normalize_base_url(built_with))
            .then_some(runtime)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
