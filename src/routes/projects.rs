//! Project routes. Both pass the upstream body through unchanged.

use axum::extract::{Path, State};

use super::auth::AccessToken;
use crate::services::proxy::{self, ProxyResponse};
use crate::state::AppState;

/// `GET /api/projects`: list the caller's projects.
pub async fn list_projects(State(state): State<AppState>, AccessToken(token): AccessToken) -> ProxyResponse {
    proxy::forward(state.upstream.as_ref(), &proxy::PROJECTS, token.as_deref(), &[]).await
}

/// `GET /api/projects/{slug}/time-entries`: time entries logged against one project.
pub async fn project_time_entries(
    State(state): State<AppState>,
    AccessToken(token): AccessToken,
    Path(slug): Path<String>,
) -> ProxyResponse {
    proxy::forward(state.upstream.as_ref(), &proxy::PROJECT_TIME_ENTRIES, token.as_deref(), &[("slug", slug.as_str())])
        .await
}
