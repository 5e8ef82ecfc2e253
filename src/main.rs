mod config;
mod routes;
mod services;
mod state;
mod upstream;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let upstream = upstream::HttpUpstream::new(&config).expect("upstream client init failed");
    tracing::info!(
        base_url = %config.api_base_url,
        cookie = %config.access_token_cookie,
        "upstream API configured"
    );

    let port = config.port;
    let state = state::AppState::new(config, Arc::new(upstream));

    // Pages are optional: without Leptos options the API still serves.
    let app = match routes::leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "leptos unavailable; serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "cosplanner listening");
    axum::serve(listener, app).await.expect("server failed");
}
