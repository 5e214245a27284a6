use std::sync::atomic::Ordering;

use serde_json::json;
use udict_config::Config;
use udict_types::AppEvent;

use super::{FakeFetcher, plain_state, red};
use crate::events::query::handle_query;
use crate::state::AppState;

fn reply(event: AppEvent) -> String {
    match event {
        AppEvent::Reply(line) => line,
        other => panic!("expected reply, got {other:?}"),
    }
}

fn failure(event: AppEvent) -> String {
    match event {
        AppEvent::Failure(line) => line,
        other => panic!("expected failure, got {other:?}"),
    }
}

fn records(definitions: &[String]) -> String {
    let list: Vec<_> = definitions
        .iter()
        .map(|d| json!({ "definition": d, "example": "", "thumbs_up": 0, "thumbs_down": 0 }))
        .collect();
    json!({ "list": list }).to_string()
}

#[tokio::test]
async fn single_definition_reply() {
    let definition = "x".repeat(50);
    let fetcher = FakeFetcher::payload(&records(&[definition.clone()]));
    let state = plain_state(fetcher.clone());

    let line = reply(handle_query(&state, "hello").await);

    assert_eq!(line, format!("{} :: {definition}", red("hello")));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_failure_message() {
    let state = plain_state(FakeFetcher::failing());

    let line = failure(handle_query(&state, "hello").await);

    assert_eq!(line, "Error: Could not retrieve data for 'hello'.");
}

#[tokio::test]
async fn parse_failure_message() {
    let state = plain_state(FakeFetcher::payload("<html>502 Bad Gateway</html>"));

    let line = failure(handle_query(&state, "hello").await);

    assert_eq!(line, "Error: Failed to parse Urban Dictionary data.");
}

#[tokio::test]
async fn empty_list_message() {
    let state = plain_state(FakeFetcher::payload(r#"{"list": []}"#));

    let line = failure(handle_query(&state, "hello").await);

    assert_eq!(line, "Error: No definition found for 'hello'.");
}

#[tokio::test]
async fn long_definitions_stop_before_budget() {
    let definitions = vec!["d".repeat(200); 10];
    let state = plain_state(FakeFetcher::payload(&records(&definitions)));

    let line = reply(handle_query(&state, "--num 10 word").await);
    let prefix = format!("{} :: ", red("word"));
    let body = line.strip_prefix(prefix.as_str()).unwrap();
    let entries: Vec<&str> = body.split(" | ").collect();

    assert!(entries.len() < 10);
    assert_eq!(entries.len(), 5);
    assert_eq!(entries.iter().map(|e| e.chars().count()).sum::<usize>(), 1000);
}

#[tokio::test]
async fn out_of_range_num_keeps_default() {
    let definitions: Vec<String> = (0..12).map(|i| format!("def{i}")).collect();
    let state = plain_state(FakeFetcher::payload(&records(&definitions)));

    let line = reply(handle_query(&state, "--num 999 word").await);

    assert_eq!(line.matches("def").count(), 10);
}

#[tokio::test]
async fn num_limits_entries() {
    let definitions: Vec<String> = (0..5).map(|i| format!("def{i}")).collect();
    let state = plain_state(FakeFetcher::payload(&records(&definitions)));

    let line = reply(handle_query(&state, "--num 2 word").await);

    assert_eq!(line, format!("{} :: def0 | def1", red("word")));
}

#[tokio::test]
async fn num_zero_is_empty_result() {
    let state = plain_state(FakeFetcher::payload(&records(&["def".to_string()])));

    let line = failure(handle_query(&state, "--num 0 word").await);

    assert_eq!(line, "Error: No definition found for 'word'.");
}

#[tokio::test]
async fn tags_votes_and_examples() {
    let payload = json!({
        "list": [
            { "definition": "A greeting", "example": "hello there", "thumbs_up": 5, "thumbs_down": 1 }
        ],
        "tags": ["slang", "internet"]
    })
    .to_string();
    let state = plain_state(FakeFetcher::payload(&payload));

    let line = reply(handle_query(&state, "--showvotes --showtags hello").await);
    assert_eq!(
        line,
        format!(
            "{} :: A greeting Example: hello there (+5/-1) | Tags: slang | internet",
            red("hello")
        )
    );

    let line = reply(handle_query(&state, "--disableexamples hello").await);
    assert_eq!(line, format!("{} :: A greeting", red("hello")));
}

#[tokio::test]
async fn term_coloured_when_ansi_enabled() {
    let payload = records(&["def".to_string()]);
    let state = AppState::new(Config::default(), FakeFetcher::payload(&payload));

    let line = reply(handle_query(&state, "hello").await);

    assert_eq!(line, format!("{} :: def", red("hello")));
}

#[tokio::test]
async fn plain_text_strips_body_formatting() {
    let payload = records(&["\x02bold\x02 \x0312claim\x03".to_string()]);
    let state = plain_state(FakeFetcher::payload(&payload));

    let line = reply(handle_query(&state, "\x02hello\x02").await);

    assert_eq!(line, format!("{} :: bold claim", red("hello")));
}

#[tokio::test]
async fn bad_command_never_fetches() {
    let fetcher = FakeFetcher::payload(r#"{"list": []}"#);
    let state = plain_state(fetcher.clone());

    let line = failure(handle_query(&state, "--loud hello").await);

    assert!(line.starts_with("Error: Unknown option --loud. Usage: "));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}
