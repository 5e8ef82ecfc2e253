//! Runtime configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup builds one `AppConfig` and shares it through `AppState`. The proxy
//! handlers read the cookie names from here instead of hard-coding them, and
//! the upstream client reads the base URL and timeouts.

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const DEFAULT_REFRESH_TOKEN_COOKIE: &str = "refresh_token";
pub const DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required env var {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base URL of the upstream REST API. Always usable as a base for path segments.
    pub api_base_url: Url,
    pub access_token_cookie: String,
    pub refresh_token_cookie: String,
    pub timeouts: UpstreamTimeouts,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `API_BASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACCESS_TOKEN_COOKIE`: default `access_token`
    /// - `REFRESH_TOKEN_COOKIE`: default `refresh_token`
    /// - `UPSTREAM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `API_BASE_URL` is missing or any value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;
        let api_base_url = parse_base_url(raw_base.trim())?;

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let access_token_cookie = cookie_name("ACCESS_TOKEN_COOKIE", lookup("ACCESS_TOKEN_COOKIE"), DEFAULT_ACCESS_TOKEN_COOKIE)?;
        let refresh_token_cookie =
            cookie_name("REFRESH_TOKEN_COOKIE", lookup("REFRESH_TOKEN_COOKIE"), DEFAULT_REFRESH_TOKEN_COOKIE)?;
        let timeouts = UpstreamTimeouts {
            request_secs: parse_or(
                "UPSTREAM_REQUEST_TIMEOUT_SECS",
                lookup("UPSTREAM_REQUEST_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { port, api_base_url, access_token_cookie, refresh_token_cookie, timeouts })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid { var: "API_BASE_URL", reason: e.to_string() })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            var: "API_BASE_URL",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid { var: "API_BASE_URL", reason: "not a base URL".into() });
    }
    Ok(url)
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::Invalid { var, reason: e.to_string() }),
    }
}

fn cookie_name(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let name = raw
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned());
    if name.chars().any(|c| c.is_whitespace() || matches!(c, ';' | '=' | ',')) {
        return Err(ConfigError::Invalid { var, reason: format!("'{name}' is not a valid cookie name") });
    }
    Ok(name)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
