//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the same-origin proxy endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. Compiled client assets
//! are served from `/pkg`.

pub mod auth;
pub mod projects;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Same-origin API routes consumed by the client app.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/session", get(auth::session))
        .route("/api/user/me", get(users::current_user))
        .route("/api/projects", get(projects::list_projects))
        .route("/api/projects/{slug}/time-entries", get(projects::project_time_entries))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Full frontend: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section and no `LEPTOS_*` overrides).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
