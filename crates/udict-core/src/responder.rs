//! Turns a lookup payload into one bounded reply line.
//!
//! Entries are added greedily in ranking order: the first one always, every
//! later one only while the summed entry lengths stay within
//! [`MAX_TOTAL_LENGTH`]. The scan stops at the first entry that does not fit.

use crate::definition::{DefinitionRecord, LookupResult};
use crate::error::{ParseError, QueryError};
use crate::options::DisplayOptions;
use crate::preprocess::{normalize, truncate};
use crate::style::{Color, TextStyler};

/// Budget for the summed entry lengths; separators and tags are not counted
pub const MAX_TOTAL_LENGTH: usize = 1000;
/// Budget for a single definition or example before the ellipsis
pub const MAX_ENTRY_LENGTH: usize = 300;

pub const ENTRY_SEPARATOR: &str = " | ";
pub const TERM_DELIMITER: &str = " :: ";
const EXAMPLE_LABEL: &str = " Example: ";
const TAGS_LABEL: &str = "Tags: ";

/// Decode a raw lookup payload.
pub fn parse(raw: &[u8]) -> Result<LookupResult, ParseError> {
    Ok(serde_json::from_slice(raw)?)
}

/// Render one record as it appears in the reply.
pub fn render_entry(record: &DefinitionRecord, options: &DisplayOptions) -> String {
    let mut entry = truncate(normalize(&record.definition), MAX_ENTRY_LENGTH);

    if options.include_examples {
        let example = truncate(normalize(&record.example), MAX_ENTRY_LENGTH);
        if !example.is_empty() {
            entry.push_str(EXAMPLE_LABEL);
            entry.push_str(&example);
        }
    }

    if options.include_votes {
        entry.push_str(&format!(" (+{}/-{})", record.thumbs_up, record.thumbs_down));
    }

    entry
}

/// Select and join entries; `None` when no record is selected.
pub fn assemble_body(result: &LookupResult, options: &DisplayOptions) -> Option<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut total = 0;

    for record in result.records.iter().take(options.max_records) {
        let entry = render_entry(record, options);
        let len = entry.chars().count();

        if !entries.is_empty() && total + len > MAX_TOTAL_LENGTH {
            break;
        }

        total += len;
        entries.push(entry);
    }

    if entries.is_empty() {
        return None;
    }

    let mut body = entries.join(ENTRY_SEPARATOR);

    if options.include_tags && !result.tags.is_empty() {
        body.push_str(ENTRY_SEPARATOR);
        body.push_str(TAGS_LABEL);
        body.push_str(&result.tags.join(ENTRY_SEPARATOR));
    }

    Some(body)
}

/// Parse-and-assemble stage of a query
pub struct Responder {
    styler: Box<dyn TextStyler>,
    term_color: Color,
}

impl Responder {
    pub fn new(styler: Box<dyn TextStyler>, term_color: Color) -> Self {
        Self { styler, term_color }
    }

    /// Build the final `<term> :: <body>` line.
    pub fn assemble(
        &self,
        term: &str,
        result: &LookupResult,
        options: &DisplayOptions,
    ) -> Result<String, QueryError> {
        let body = assemble_body(result, options).ok_or_else(|| QueryError::Empty {
            term: term.to_string(),
        })?;

        let (term, body) = if options.plain_text {
            (self.styler.strip(term), self.styler.strip(&body))
        } else {
            (term.to_string(), body)
        };

        let term = self.styler.color(&term, self.term_color);
        Ok(format!("{term}{TERM_DELIMITER}{body}"))
    }

    /// Parse `raw` and assemble the reply for `term`.
    pub fn respond(
        &self,
        term: &str,
        raw: &[u8],
        options: &DisplayOptions,
    ) -> Result<String, QueryError> {
        let result = parse(raw).map_err(|e| {
            tracing::error!("Error parsing lookup payload for '{}': {}", term, e);
            QueryError::Parse(e)
        })?;

        tracing::debug!(
            "Decoded {} records and {} tags for '{}'",
            result.records.len(),
            result.tags.len(),
            term
        );

        self.assemble(term, &result, options).inspect_err(|_| {
            tracing::info!("No definition found for '{}'", term);
        })
    }
}
