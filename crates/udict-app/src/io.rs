use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use udict_types::{AppEvent, QuerySource};

/// Forward one query per non-blank input line.
pub async fn input_io<R>(
    reader: R,
    query_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                return Ok(());
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        query_tx
            .send(AppEvent::Query {
                line: line.to_string(),
                source: QuerySource::Stdin,
            })
            .await?;
    }

    query_tx.send(AppEvent::InputClosed).await?;
    Ok(())
}

/// Write replies and error lines until the event loop finishes.
pub async fn output_io<W>(mut writer: W, reply_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    loop {
        match reply_rx.recv().await? {
            AppEvent::Reply(line) | AppEvent::Failure(line) => {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            AppEvent::InputClosed => break,
            AppEvent::Query { .. } => {}
        }
    }

    writer.shutdown().await?;
    Ok(())
}
