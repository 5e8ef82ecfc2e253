//! `reqwest`-backed upstream client.
//!
//! One shared `reqwest::Client` (connection pool) serves every handler.
//! Redirects are not followed so a 3xx reaches the proxy as a plain status.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use super::{Upstream, UpstreamError, UpstreamReply, UpstreamRequest};
use crate::config::AppConfig;

pub struct HttpUpstream {
    http: reqwest::Client,
    base: Url,
}

impl HttpUpstream {
    /// Build the client from the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| UpstreamError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base: config.api_base_url.clone() })
    }

    /// Join request segments onto the base URL, percent-encoding each one.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be a base.
    pub fn url_for(&self, request: &UpstreamRequest) -> Result<Url, UpstreamError> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| UpstreamError::Url(format!("{} cannot be a base", self.base)))?;
            path.pop_if_empty();
            path.extend(request.segments.iter().map(String::as_str));
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Upstream for HttpUpstream {
    async fn get(&self, request: &UpstreamRequest) -> Result<UpstreamReply, UpstreamError> {
        let url = self.url_for(request)?;

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", request.bearer))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Body(e.to_string()))?;

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
