use std::env;

use serde::{Deserialize, Serialize};

fn default_term_color() -> String {
    "red".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Strip all colour and formatting codes from replies
    #[serde(default)]
    pub disable_ansi: bool,
    /// mIRC colour name used for the echoed term
    #[serde(default = "default_term_color")]
    pub term_color: String,
}

impl DisplayConfig {
    pub fn new() -> Self {
        let disable_ansi = env::var("UDICT_DISABLE_ANSI")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let term_color = env::var("UDICT_TERM_COLOR").unwrap_or_else(|_| default_term_color());

        Self {
            disable_ansi,
            term_color,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            disable_ansi: false,
            term_color: default_term_color(),
        }
    }
}
