//! Client configuration.
//!
//! The backend URL is baked in at build time from `ARTSTORE_API_URL`, since
//! the WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_URL_ENV: &str = "ARTSTORE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL including the `/api` prefix, no trailing slash.
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("ARTSTORE_API_URL"))
    }

    fn from_value(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(normalize_base_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        Self { api_base_url }
    }
}

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
