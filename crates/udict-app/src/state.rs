use std::sync::Arc;

use udict_config::Config;
use udict_core::{Color, Responder};
use udict_fetch::Fetcher;

use crate::style::MircStyler;

/// Read-only context shared by every query
pub struct AppState {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher>,
    pub responder: Responder,
}

impl AppState {
    pub fn new(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let term_color = config.display.term_color.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, using red", e);
            Color::Red
        });

        Self {
            config,
            fetcher,
            responder: Responder::new(Box::new(MircStyler), term_color),
        }
    }
}
