use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw chat line: options followed by the term
    Query { line: String, source: QuerySource },
    /// Rendered definition line
    Reply(String),
    /// User-facing error line
    Failure(String),
    /// No more input will arrive
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuerySource {
    Cli,
    Stdin,
}
