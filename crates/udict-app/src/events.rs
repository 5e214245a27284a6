use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use udict_types::AppEvent;

use crate::state::AppState;

pub mod query;

use query::handle_query;

/// Dispatch queries until input closes or shutdown is requested.
///
/// Every query runs in its own task; in-flight queries are awaited before
/// the output side is told to stop.
pub async fn event_loop(
    state: Arc<AppState>,
    query_rx: AsyncReceiver<AppEvent>,
    reply_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut queries = JoinSet::new();

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Event loop stopping");
                break;
            }
            event = query_rx.recv() => event?,
        };

        match event {
            AppEvent::Query { line, source } => {
                tracing::info!("Query from {:?}: {}", source, line);

                let state = Arc::clone(&state);
                let reply_tx = reply_tx.clone();
                queries.spawn(async move {
                    let reply = handle_query(&state, &line).await;
                    if let Err(e) = reply_tx.send(reply).await {
                        tracing::error!("Failed to send reply: {}", e);
                    }
                });
            }
            AppEvent::InputClosed => {
                tracing::debug!("Input closed");
                break;
            }
            AppEvent::Reply(_) | AppEvent::Failure(_) => {
                tracing::warn!("Ignoring outbound event on the query channel");
            }
        }

        while let Some(result) = queries.try_join_next() {
            if let Err(e) = result {
                tracing::error!("Query task panicked: {}", e);
            }
        }
    }

    while let Some(result) = queries.join_next().await {
        if let Err(e) = result {
            tracing::error!("Query task panicked: {}", e);
        }
    }

    reply_tx.send(AppEvent::InputClosed).await?;
    Ok(())
}
