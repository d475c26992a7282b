//! Signal handling for graceful shutdown

use std::{future::Future, io};

use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::{error, info, warn};

fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGTERM => "SIGTERM",
        SIGINT => "SIGINT",
        _ => "unexpected signal",
    }
}

/// Resolve on the first SIGTERM or SIGINT
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([SIGTERM, SIGINT]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to register signal handlers ({}), waiting for Ctrl-C only", e);
            ctrl_c_fallback(tokio::signal::ctrl_c()).await;
            return;
        }
    };
    let handle = signals.handle();

    if let Some(signal) = signals.next().await {
        info!("Received {}", signal_name(signal));
    }
    handle.close();
}

/// Resolve when `ctrl_c` does. If listening fails there is nothing left to
/// wait on, so never resolve rather than shut the server down.
async fn ctrl_c_fallback(ctrl_c: impl Future<Output = io::Result<()>>) {
    match ctrl_c.await {
        Ok(()) => info!("Received Ctrl-C"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
