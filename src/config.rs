// src/config.rs
use crate::errors::{AppError, Result};
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;

/// Application configuration, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API root. Always ends with `/`.
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MEALDB_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let host = lookup("MEALDB_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("MEALDB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("MEALDB_PORT must be a port number, got '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };

        let debug = match lookup("MEALDB_DEBUG") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("MEALDB_DEBUG must be a boolean, got '{}'", raw))
            })?,
            None => false,
        };

        Ok(AppConfig { base_url, host, port, debug })
    }

    /// Default `env_logger` filter for this configuration.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| AppError::Config(format!("MEALDB_BASE_URL '{}' is not a valid URL: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::Config(format!(
            "MEALDB_BASE_URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    let mut base = url.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
