//! Session proxy: forward a cookie-authenticated request to the upstream API.
//!
//! DESIGN
//! ======
//! Every proxied resource shares one control flow:
//!
//! 1. no token → `NotAuthenticated`, no upstream call
//! 2. build the upstream path from the route template and parameters; an
//!    empty or dot parameter answers 404 without an upstream call
//! 3. one GET with the token as a bearer credential, never retried
//! 4. 2xx → shaped JSON, 401 → `TokenExpired`, other status → passthrough
//! 5. anything unexpected → `Internal`, detail logged, never echoed
//!
//! A resource is described by a `ProxyRoute` constant: the upstream path
//! template, the resource name used in error messages, and the function that
//! shapes a successful body. Route handlers only pick the constant and pass
//! the token and path parameters through.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{Value, json};

use crate::upstream::{Upstream, UpstreamError, UpstreamReply, UpstreamRequest};

// =============================================================================
// ROUTES
// =============================================================================

/// Upstream resource description.
#[derive(Debug, Clone, Copy)]
pub struct ProxyRoute {
    /// Path template, e.g. `/api/v2/timesheets/projects/{slug}`.
    pub path: &'static str,
    /// Human name used in `Failed to fetch <resource>`.
    pub resource: &'static str,
    /// Turns a successful upstream body into the client-facing body.
    pub shape: fn(Value) -> Value,
}

/// `GET /api/v2/users/me`, re-wrapped as `{ "user": <data> }`.
pub const CURRENT_USER: ProxyRoute = ProxyRoute { path: "/api/v2/users/me", resource: "user", shape: wrap_user };

/// `GET /api/v2/projects`, passed through unchanged.
pub const PROJECTS: ProxyRoute = ProxyRoute { path: "/api/v2/projects", resource: "projects", shape: passthrough };

/// `GET /api/v2/timesheets/projects/{slug}`, passed through unchanged.
pub const PROJECT_TIME_ENTRIES: ProxyRoute =
    ProxyRoute { path: "/api/v2/timesheets/projects/{slug}", resource: "time entries", shape: passthrough };

fn wrap_user(body: Value) -> Value {
    let user = match body {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Null),
        _ => Value::Null,
    };
    json!({ "user": user })
}

fn passthrough(body: Value) -> Value {
    body
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failures collapsed into the generic 500 response.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("missing route parameter '{0}'")]
    MissingParam(String),

    #[error("route parameter '{0}' is not a single path segment")]
    InvalidParam(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Client-facing outcome of one proxied request.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxyResponse {
    /// Upstream answered 2xx; body already shaped for the endpoint.
    Success(Value),
    /// No access-token cookie was presented.
    NotAuthenticated,
    /// A token was presented and upstream rejected it with 401.
    TokenExpired,
    /// Upstream answered a non-2xx, non-401 status.
    UpstreamFailure { status: StatusCode, resource: &'static str },
    /// Transport, decode or build failure.
    Internal,
}

impl ProxyResponse {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::OK,
            Self::NotAuthenticated | Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::UpstreamFailure { status, .. } => *status,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::NotAuthenticated => json!({ "error": "Not authenticated" }),
            Self::TokenExpired => json!({ "error": "Token expired", "needsRefresh": true }),
            Self::UpstreamFailure { resource, .. } => json!({ "error": format!("Failed to fetch {resource}") }),
            Self::Internal => json!({ "error": "An error occurred" }),
        }
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Success(body) => (status, Json(body)).into_response(),
            other => (status, Json(other.body())).into_response(),
        }
    }
}

// =============================================================================
// FORWARDING
// =============================================================================

/// Build the upstream request for `route`, substituting `{name}` segments.
///
/// # Errors
///
/// Returns an error if the template names a parameter that was not supplied,
/// or if a supplied value is empty, `.` or `..` (the URL would collapse it and
/// address a different resource).
pub fn build_request(route: &ProxyRoute, token: &str, params: &[(&str, &str)]) -> Result<UpstreamRequest, ProxyError> {
    let segments = route
        .path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .ok_or_else(|| ProxyError::MissingParam(name.to_owned()))
                .and_then(|(_, value)| match *value {
                    "" | "." | ".." => Err(ProxyError::InvalidParam(name.to_owned())),
                    value => Ok(value.to_owned()),
                }),
            None => Ok(segment.to_owned()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(UpstreamRequest { segments, bearer: token.to_owned() })
}

/// Forward one inbound request to the upstream resource described by `route`.
///
/// Never fails: every error is mapped onto a `ProxyResponse` variant.
pub async fn forward(
    upstream: &dyn Upstream,
    route: &ProxyRoute,
    token: Option<&str>,
    params: &[(&str, &str)],
) -> ProxyResponse {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return ProxyResponse::NotAuthenticated;
    };

    match dispatch(upstream, route, token, params).await {
        Ok(response) => response,
        Err(ProxyError::InvalidParam(name)) => {
            tracing::warn!(resource = route.resource, param = %name, "rejected route parameter");
            ProxyResponse::UpstreamFailure { status: StatusCode::NOT_FOUND, resource: route.resource }
        }
        Err(e) => {
            tracing::error!(resource = route.resource, error = %e, "proxy request failed");
            ProxyResponse::Internal
        }
    }
}

async fn dispatch(
    upstream: &dyn Upstream,
    route: &ProxyRoute,
    token: &str,
    params: &[(&str, &str)],
) -> Result<ProxyResponse, ProxyError> {
    let request = build_request(route, token, params)?;
    let reply = upstream.get(&request).await?;
    tracing::debug!(resource = route.resource, path = %request.path(), status = reply.status, "upstream replied");
    interpret(route, reply)
}

/// Map an upstream reply onto the client-facing response.
///
/// # Errors
///
/// Returns an error if a 2xx body is not valid JSON.
pub fn interpret(route: &ProxyRoute, reply: UpstreamReply) -> Result<ProxyResponse, ProxyError> {
    match reply.status {
        200..=299 => {
            let body: Value = serde_json::from_str(&reply.body)?;
            Ok(ProxyResponse::Success((route.shape)(body)))
        }
        401 => {
            tracing::info!(resource = route.resource, "upstream rejected token");
            Ok(ProxyResponse::TokenExpired)
        }
        other => {
            tracing::warn!(resource = route.resource, status = other, "upstream request unsuccessful");
            let status = StatusCode::from_u16(other).unwrap_or(StatusCode::BAD_GATEWAY);
            Ok(ProxyResponse::UpstreamFailure { status, resource: route.resource })
        }
    }
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
