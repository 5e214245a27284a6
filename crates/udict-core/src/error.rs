/// Query outcomes that replace the definition line.
///
/// `Display` is the exact text shown to the user; causes stay in the logs.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Could not retrieve data for '{term}'.")]
    Fetch { term: String },

    #[error("Failed to parse Urban Dictionary data.")]
    Parse(#[source] ParseError),

    #[error("No definition found for '{term}'.")]
    Empty { term: String },
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid lookup payload: {0}")]
pub struct ParseError(#[from] serde_json::Error);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Missing term")]
    MissingTerm,

    #[error("Option --{0} requires a value")]
    MissingValue(String),

    #[error("Unknown option --{0}")]
    UnknownOption(String),
}
