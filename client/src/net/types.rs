//! Payload DTOs relayed by the server proxy.
//!
//! DESIGN
//! ======
//! Upstream schemas are owned by the external API, so every optional field
//! carries `#[serde(default)]` and unknown fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Authenticated user as returned inside `{ "user": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Name shown in the navigation shell; falls back to the id.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.username.trim().is_empty() { self.id.clone() } else { self.username.clone() }
    }
}

/// `GET /api/user/me` success body.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentUserEnvelope {
    #[serde(default)]
    pub user: Option<User>,
}

/// A cosplay project owned by or shared with the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One logged block of work on a project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub date: Option<String>,
}

/// Client-facing error body produced by the proxy.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, rename = "needsRefresh")]
    pub needs_refresh: bool,
}

/// Decode a list body that is either a bare array or a paginated
/// `{ "results": [...] }` object.
///
/// # Errors
///
/// Returns an error if the items do not match `T`.
pub fn list_items<T: DeserializeOwned>(body: serde_json::Value) -> Result<Vec<T>, serde_json::Error> {
    match body {
        serde_json::Value::Object(mut map) if map.contains_key("results") => {
            serde_json::from_value(map.remove("results").unwrap_or_default())
        }
        other => serde_json::from_value(other),
    }
}

/// Sum of logged hours.
#[must_use]
pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries.iter().map(|e| e.hours).sum()
}
