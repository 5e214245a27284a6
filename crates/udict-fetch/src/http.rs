use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use udict_config::lookup::LookupConfig;

use crate::{FetchError, Fetcher};

/// Fetches definitions from the Urban Dictionary HTTP API
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    api_url: String,
    timeout_seconds: u64,
}

impl HttpFetcher {
    pub fn new(config: &LookupConfig) -> Result<Self, FetchError> {
        // No idle connections survive a query
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    async fn request(&self, term: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("term", term)])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, term: &str) -> Result<Vec<u8>, FetchError> {
        let deadline = Duration::from_secs(self.timeout_seconds);

        let result = match tokio::time::timeout(deadline, self.request(term)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout_seconds)),
        };

        match &result {
            Ok(body) => tracing::debug!("Fetched {} bytes for '{}'", body.len(), term),
            Err(e) => tracing::error!("Error fetching {} for '{}': {}", self.api_url, term, e),
        }

        result
    }
}
