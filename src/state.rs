//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the parsed configuration and the upstream client.
//! Handlers hold no other cross-request state.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::upstream::Upstream;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self { config: Arc::new(config), upstream }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::UpstreamTimeouts;
    use crate::upstream::{UpstreamError, UpstreamReply, UpstreamRequest};

    /// Config pointing at an unroutable upstream with default cookie names.
    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            port: 0,
            api_base_url: reqwest::Url::parse("http://upstream.invalid").expect("static URL parses"),
            access_token_cookie: "access_token".into(),
            refresh_token_cookie: "refresh_token".into(),
            timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 2 },
        }
    }

    /// Create a test `AppState` around the given upstream.
    #[must_use]
    pub fn test_app_state(upstream: Arc<dyn Upstream>) -> AppState {
        AppState::new(test_config(), upstream)
    }

    /// Upstream that answers every request with one fixed reply and counts calls.
    pub struct StaticUpstream {
        pub status: u16,
        pub body: &'static str,
        pub calls: AtomicUsize,
        pub last: Mutex<Option<UpstreamRequest>>,
    }

    impl StaticUpstream {
        #[must_use]
        pub fn new(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self { status, body, calls: AtomicUsize::new(0), last: Mutex::new(None) })
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Upstream for StaticUpstream {
        async fn get(&self, request: &UpstreamRequest) -> Result<UpstreamReply, UpstreamError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().expect("lock poisoned") = Some(request.clone());
            Ok(UpstreamReply { status: self.status, body: self.body.to_owned() })
        }
    }

    /// Serve `router` on an ephemeral local port and return its base URL.
    pub async fn spawn_router(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}")
    }
}
