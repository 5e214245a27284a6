use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::display::DisplayConfig;
use self::lookup::LookupConfig;

pub mod display;
pub mod lookup;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub display: DisplayConfig,

    /// Capacity of the query and reply channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("UDICT_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_channel_capacity);

        Config {
            lookup: LookupConfig::new(),
            display: DisplayConfig::new(),
            channel_capacity,
        }
    }

    /// Load a JSON profile. Missing sections and fields fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            display: DisplayConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}
