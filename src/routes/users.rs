//! Current-user lookup.

use axum::extract::State;

use super::auth::AccessToken;
use crate::services::proxy::{self, ProxyResponse};
use crate::state::AppState;

/// `GET /api/user/me`: proxy to the upstream `users/me`, answering `{ "user": ... }`.
pub async fn current_user(State(state): State<AppState>, AccessToken(token): AccessToken) -> ProxyResponse {
    proxy::forward(state.upstream.as_ref(), &proxy::CURRENT_USER, token.as_deref(), &[]).await
}
