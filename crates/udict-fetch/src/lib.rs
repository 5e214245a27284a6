mod http;

pub use http::HttpFetcher;

/// Source of raw lookup payloads
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the raw payload for `term`, making exactly one request
    async fn fetch(&self, term: &str) -> Result<Vec<u8>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
