use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use udict_config::Config;
use udict_fetch::HttpFetcher;
use udict_types::AppEvent;

pub mod cli;
pub mod controller;
pub mod events;
pub mod io;
pub mod runtime;
pub mod state;
pub mod style;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::events::query::handle_query;
use self::state::AppState;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(&cli);

    // tokio's stdin reads on the blocking pool; a plain runtime drop would
    // wait for the next input line after Ctrl-C
    match runtime::block_on(run(cli)).and_then(|result| result) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("udict failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(&cli)?;
    let fetcher = Arc::new(HttpFetcher::new(&config.lookup)?);
    let state = Arc::new(AppState::new(config, fetcher));

    if !cli.query.is_empty() {
        return Ok(answer_once(&state, &cli.query.join(" ")).await);
    }

    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            result = tasks.join_next() => match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e:#}");
                    controller.shutdown();
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    controller.shutdown();
                }
                None => break,
            },
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn answer_once(state: &AppState, line: &str) -> ExitCode {
    match handle_query(state, line).await {
        AppEvent::Reply(reply) => {
            println!("{reply}");
            ExitCode::SUCCESS
        }
        AppEvent::Failure(message) => {
            println!("{message}");
            ExitCode::FAILURE
        }
        AppEvent::Query { .. } | AppEvent::InputClosed => ExitCode::FAILURE,
    }
}

/// Profile file or environment, then command-line overrides
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };

    if let Some(api_url) = &cli.api_url {
        config.lookup.api_url = api_url.clone();
    }
    if let Some(max) = cli.max_definitions {
        config.lookup.max_number_of_definitions = max;
    }
    if cli.plain {
        config.display.disable_ansi = true;
    }

    tracing::debug!("Effective config: {}", serde_json::to_string(&config)?);
    Ok(config)
}

fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn,udict=info",
        1 => "info,udict=debug",
        _ => "debug,udict=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_ansi(atty::is(atty::Stream::Stderr))
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
