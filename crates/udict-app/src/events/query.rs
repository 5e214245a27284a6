use udict_core::{DisplayOptions, QueryError, USAGE, parse_command};
use udict_types::AppEvent;

use crate::state::AppState;

/// Answer one chat line with either a reply or an error line.
pub async fn handle_query(state: &AppState, line: &str) -> AppEvent {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            tracing::debug!("Rejected query {:?}: {}", line, e);
            return AppEvent::Failure(format!("Error: {e}. Usage: {USAGE}"));
        }
    };

    let options = DisplayOptions::from_flags(
        &command.flags,
        &state.config.lookup,
        state.config.display.disable_ansi,
    );
    tracing::debug!("Looking up '{}' with {:?}", command.term, options);

    match lookup(state, &command.term, &options).await {
        Ok(reply) => AppEvent::Reply(reply),
        Err(e) => AppEvent::Failure(format!("Error: {e}")),
    }
}

/// Fetch, parse and assemble the reply for `term`.
pub async fn lookup(
    state: &AppState,
    term: &str,
    options: &DisplayOptions,
) -> Result<String, QueryError> {
    // The fetcher logs its own failures
    let raw = state
        .fetcher
        .fetch(term)
        .await
        .map_err(|_| QueryError::Fetch {
            term: term.to_string(),
        })?;

    state.responder.respond(term, &raw, options)
}
