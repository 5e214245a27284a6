use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://api.urbandictionary.com/v0/define".to_string()
}

fn default_max_number_of_definitions() -> usize {
    10
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("udict/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Remote lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Ceiling and default for the number of definitions per reply
    #[serde(default = "default_max_number_of_definitions")]
    pub max_number_of_definitions: usize,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_url = env::var("UDICT_API_URL").unwrap_or_else(|_| default_api_url());

        let max_number_of_definitions = env::var("UDICT_MAX_DEFINITIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_number_of_definitions);

        let timeout_seconds = env::var("UDICT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            api_url,
            max_number_of_definitions,
            timeout_seconds,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            max_number_of_definitions: default_max_number_of_definitions(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
