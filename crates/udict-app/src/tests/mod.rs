use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use udict_config::Config;
use udict_fetch::{FetchError, Fetcher};

use crate::state::AppState;

mod query_tests;

/// Canned fetch outcome
#[derive(Clone)]
pub enum Canned {
    Payload(String),
    Timeout,
}

/// Fetcher that never touches the network
pub struct FakeFetcher {
    canned: Canned,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn payload(body: &str) -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Payload(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            canned: Canned::Timeout,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, _term: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.canned {
            Canned::Payload(body) => Ok(body.clone().into_bytes()),
            Canned::Timeout => Err(FetchError::Timeout(10)),
        }
    }
}

/// Echoed term as the mIRC styler colours it
pub fn red(term: &str) -> String {
    format!("\x0304{term}\x03")
}

/// Plain-text state with a ceiling of ten
pub fn plain_state(fetcher: Arc<FakeFetcher>) -> AppState {
    let mut config = Config::default();
    config.display.disable_ansi = true;
    AppState::new(config, fetcher)
}
