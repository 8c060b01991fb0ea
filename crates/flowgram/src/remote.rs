//! Client for the external Graphviz rasterization service.
//!
//! The service accepts `{"graph": <dot>, "format": "svg"|"png"}` and returns
//! the rendered bytes. It is strictly best-effort: the DOT and draw.io
//! artifacts are computed locally, so a slow or failing service degrades to a
//! reported error and nothing else.

use serde_json::json;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://quickchart.io/graphviz";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "svg" => Some(ImageFormat::Svg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("render service returned status {status}")]
    Status { status: u16 },
    #[error("render service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RemoteError>;

/// Blocking HTTP client for the rasterization service. Construct once and
/// reuse; the underlying connection pool is shared across calls.
#[derive(Debug, Clone)]
pub struct RenderClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl RenderClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Renders DOT source to image bytes. Timeouts and transport failures
    /// surface as [`RemoteError::Transport`]; non-200 responses as
    /// [`RemoteError::Status`]. Callers should treat both as retryable.
    pub fn render(&self, dot: &str, format: ImageFormat) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({"graph": dot, "format": format.as_str()}))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "render service rejected request");
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// Stable cache key for rendered output: identical DOT text (and therefore
/// identical graph/theme/options, since generation is deterministic) always
/// hashes to the same key.
pub fn dot_cache_key(dot: &str) -> String {
    format!("{:016x}", flowgram_core::graph::fnv1a64(dot.as_bytes()))
}
