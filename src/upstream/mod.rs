//! Upstream REST API access.
//!
//! DESIGN
//! ======
//! Proxy handlers talk to the backend through the `Upstream` trait so tests
//! can substitute a recording mock. `HttpUpstream` is the only production
//! implementation. Interpretation of status codes and bodies belongs to the
//! proxy service; this layer only performs the single round trip.

pub mod http;

pub use http::HttpUpstream;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while performing an upstream round trip.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The configured base URL cannot carry path segments.
    #[error("upstream URL build failed: {0}")]
    Url(String),

    /// The request never produced a response (DNS, connect, timeout).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// The response body could not be read.
    #[error("upstream body read failed: {0}")]
    Body(String),
}

// =============================================================================
// REQUEST / REPLY
// =============================================================================

/// One outbound GET to the upstream API.
///
/// `segments` are decoded path segments appended to the configured base URL;
/// the transport is responsible for percent-encoding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub segments: Vec<String>,
    pub bearer: String,
}

impl UpstreamRequest {
    /// Display form of the path (unencoded), used in logs.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Raw upstream response: status code and unparsed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

/// Seam over the upstream REST API.
#[async_trait::async_trait]
pub trait Upstream: Send + Sync {
    /// Perform exactly one GET with bearer credentials.
    async fn get(&self, request: &UpstreamRequest) -> Result<UpstreamReply, UpstreamError>;
}
