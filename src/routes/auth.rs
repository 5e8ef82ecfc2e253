//! Session cookie plumbing: token extraction and presence reporting.
//!
//! The cookies are owned by the external auth subsystem. Nothing here sets or
//! clears them, and token values never leave this module except as the
//! bearer credential handed to the proxy.

use std::convert::Infallible;

use axum::extract::{FromRef, State};
use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::state::AppState;

// =============================================================================
// ACCESS TOKEN EXTRACTOR
// =============================================================================

/// Access token read from the configured cookie, `None` when absent or empty.
///
/// Never rejects: handlers turn a missing token into the `Not authenticated`
/// envelope themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub Option<String>);

impl<S> axum::extract::FromRequestParts<S> for AccessToken
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(cookie_value(&jar, &app_state.config.access_token_cookie)))
    }
}

fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(Cookie::value)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionPresence {
    pub has_access_token: bool,
    pub has_refresh_token: bool,
}

/// `GET /api/auth/session`: report which session cookies are present.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<SessionPresence> {
    Json(SessionPresence {
        has_access_token: cookie_value(&jar, &state.config.access_token_cookie).is_some(),
        has_refresh_token: cookie_value(&jar, &state.config.refresh_token_cookie).is_some(),
    })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
