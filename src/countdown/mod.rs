//! Countdown to the symposium start
//!
//! [`Remaining::between`] is the pure per-tick computation. [`Countdown`]
//! owns the single tick task that applies it on a fixed cadence and hands
//! the results out through a watch channel.

pub mod clock;
pub mod remaining;
pub mod target;

pub use clock::{Clock, ManualClock, SystemClock};
pub use remaining::Remaining;
pub use target::CountdownTarget;

use std::{sync::Arc, time::Duration};

use futures::stream::{self, Stream};
use tokio::{sync::watch, task::JoinHandle};
use tracing::info;

use crate::tasks::{countdown_tick_task, SnapshotPublisher};

/// Default tick cadence
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// A running countdown. Dropping it cancels the tick task.
pub struct Countdown {
    target_tx: watch::Sender<CountdownTarget>,
    snapshot_rx: watch::Receiver<Remaining>,
    publisher: SnapshotPublisher,
    clock: Arc<dyn Clock>,
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start ticking toward `target`. Must be called inside a tokio runtime.
    pub fn start(target: CountdownTarget, period: Duration, clock: Arc<dyn Clock>) -> Self {
        let (target_tx, target_rx) = watch::channel(target);
        let (snapshot_tx, snapshot_rx) = watch::channel(target.remaining_at(clock.now()));
        let publisher = SnapshotPublisher::new(snapshot_tx);

        let task = tokio::spawn(countdown_tick_task(
            target_rx,
            publisher.clone(),
            period,
            Arc::clone(&clock),
        ));

        info!("Countdown started toward {}", target);
        Self {
            target_tx,
            snapshot_rx,
            publisher,
            clock,
            task,
        }
    }

    pub fn target(&self) -> CountdownTarget {
        *self.target_tx.borrow()
    }

    /// The most recently published snapshot
    pub fn current(&self) -> Remaining {
        *self.snapshot_rx.borrow()
    }

    /// True once the zero snapshot is out or the target instant has passed
    pub fn is_finished(&self) -> bool {
        self.current().is_zero() || self.target().has_passed(self.clock.now())
    }

    pub fn is_stopped(&self) -> bool {
        self.publisher.is_closed()
    }

    /// Point the countdown at a new target. The next tick computes against
    /// it; a countdown that already hit zero starts ticking again.
    pub fn retarget(&self, target: CountdownTarget) {
        let previous = self.target_tx.send_replace(target);
        info!("Countdown target changed from {} to {}", previous, target);
    }

    pub fn subscribe(&self) -> watch::Receiver<Remaining> {
        self.snapshot_rx.clone()
    }

    /// Stream of snapshots: the current one first, then each change. Ends
    /// after a zero snapshot or when the countdown is stopped.
    pub fn snapshots(&self) -> impl Stream<Item = Remaining> + Send + 'static {
        let rx = self.snapshot_rx.clone();
        stream::unfold((rx, None), |(mut rx, last): (_, Option<Remaining>)| async move {
            if last.is_some_and(|r| r.is_zero()) {
                return None;
            }
            loop {
                if last.is_some() {
                    rx.changed().await.ok()?;
                }
                let current = *rx.borrow_and_update();
                if Some(current) != last {
                    return Some((current, (rx, Some(current))));
                }
            }
        })
    }

    /// Cancel the tick task. Returns true for the call that stopped it.
    pub fn stop(&self) -> bool {
        if !self.publisher.close() {
            return false;
        }
        self.task.abort();
        info!("Countdown toward {} stopped", self.target());
        true
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.stop();
    }
}
