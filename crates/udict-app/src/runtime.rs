use std::future::Future;
use std::time::Duration;

use tokio::runtime::Builder;

/// How long exit waits on blocking-pool work such as a pending stdin read
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Drive `future` to completion on a fresh runtime, then shut the runtime
/// down without waiting for blocked reads to finish.
pub fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = Builder::new_multi_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    Ok(output)
}
