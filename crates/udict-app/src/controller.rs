use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use udict_types::AppEvent;

use crate::events::event_loop;
use crate::io::{input_io, output_io};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub queries: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub replies: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            queries: kanal::bounded_async(capacity),
            replies: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(state.config.channel_capacity.max(1)),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<R, W>(&self, reader: R, writer: W) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        tasks.spawn(input_io(
            reader,
            self.channels.queries.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.queries.1.clone(),
            self.channels.replies.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks.spawn(output_io(writer, self.channels.replies.1.clone()));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
