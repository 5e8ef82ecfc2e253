//! REST helpers for the server's same-origin proxy endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since the
//! session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are decoded from the proxy's `{ error, needsRefresh }`
//! envelope into `ApiError`, so pages can tell "never signed in" from
//! "session went stale" and invalidate the session accordingly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::de::DeserializeOwned;

use super::types::{CurrentUserEnvelope, ErrorEnvelope, Project, TimeEntry, User, list_items};

pub const CURRENT_USER_ENDPOINT: &str = "/api/user/me";
pub const PROJECTS_ENDPOINT: &str = "/api/projects";

/// Failure of a proxy call as seen by the UI.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// No session cookie was presented.
    NotAuthenticated,
    /// The session cookie was rejected upstream; a refresh is needed.
    TokenExpired,
    /// Any other non-2xx status.
    Failed { status: u16, message: String },
    /// The request did not complete.
    Transport(String),
    /// The success body did not match the expected shape.
    Decode(String),
    /// Called outside the browser.
    Unavailable,
    /// A route parameter that would not stay inside its path segment.
    InvalidSegment(String),
}

impl ApiError {
    /// True when the session should be considered gone.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::TokenExpired)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => f.write_str("not signed in"),
            Self::TokenExpired => f.write_str("session expired"),
            Self::Failed { message, .. } => f.write_str(message),
            Self::Transport(e) => write!(f, "network error: {e}"),
            Self::Decode(e) => write!(f, "unexpected response: {e}"),
            Self::Unavailable => f.write_str("not available on server"),
            Self::InvalidSegment(raw) => write!(f, "invalid path segment: {raw:?}"),
        }
    }
}

/// Map a non-2xx status and body onto an `ApiError`.
#[must_use]
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();
    match (status, envelope) {
        (401, Some(envelope)) if envelope.needs_refresh => ApiError::TokenExpired,
        (401, _) => ApiError::NotAuthenticated,
        (_, Some(envelope)) => ApiError::Failed { status, message: envelope.error },
        (_, None) => ApiError::Failed { status, message: format!("request failed: {status}") },
    }
}

/// Percent-encode `raw` as exactly one path segment.
///
/// Empty and dot segments are rejected: the browser would collapse them and
/// the request would land on a different endpoint.
fn path_segment(raw: &str) -> Result<String, ApiError> {
    if matches!(raw, "" | "." | "..") {
        return Err(ApiError::InvalidSegment(raw.to_owned()));
    }
    Ok(urlencoding::encode(raw).into_owned())
}

fn time_entries_endpoint(slug: &str) -> Result<String, ApiError> {
    Ok(format!("/api/projects/{}/time-entries", path_segment(slug)?))
}

/// Decode a success body, or classify the failure.
#[cfg(any(test, feature = "hydrate"))]
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(classify_failure(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Resolve the signed-in user via `/api/user/me`.
///
/// # Errors
///
/// Returns the classified proxy failure.
pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    let envelope: CurrentUserEnvelope = get_json(CURRENT_USER_ENDPOINT).await?;
    Ok(envelope.user)
}

/// List projects via `/api/projects`.
///
/// # Errors
///
/// Returns the classified proxy failure.
pub async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    let body: serde_json::Value = get_json(PROJECTS_ENDPOINT).await?;
    list_items(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// List a project's time entries via `/api/projects/{slug}/time-entries`.
///
/// # Errors
///
/// Returns the classified proxy failure.
pub async fn fetch_time_entries(slug: &str) -> Result<Vec<TimeEntry>, ApiError> {
    let body: serde_json::Value = get_json(&time_entries_endpoint(slug)?).await?;
    list_items(body).map_err(|e| ApiError::Decode(e.to_string()))
}
