//! Countdown tick background task

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::{
    sync::watch,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::countdown::{Clock, CountdownTarget, Remaining};

/// Write side of the snapshot channel. Closing it drops the sender, which
/// ends every subscriber's stream and stops the tick task.
#[derive(Debug, Clone)]
pub struct SnapshotPublisher(Arc<Mutex<Option<watch::Sender<Remaining>>>>);

impl SnapshotPublisher {
    pub fn new(tx: watch::Sender<Remaining>) -> Self {
        Self(Arc::new(Mutex::new(Some(tx))))
    }

    /// Publish a snapshot; returns false once the publisher is closed
    pub fn publish(&self, remaining: Remaining) -> bool {
        let guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(tx) => {
                tx.send_replace(remaining);
                true
            }
            None => false,
        }
    }

    /// Close the channel. Returns true only for the call that closed it.
    pub fn close(&self) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }
}

/// Tick toward the current target, publishing one snapshot per period.
///
/// Once the floored remainder hits zero a single zero snapshot is
/// published and ticking stops; the task then idles until the target changes or the handle goes
/// away.
pub async fn countdown_tick_task(
    mut target_rx: watch::Receiver<CountdownTarget>,
    publisher: SnapshotPublisher,
    period: Duration,
    clock: Arc<dyn Clock>,
) {
    info!("Starting countdown tick task (period {:?})", period);

    loop {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut target = *target_rx.borrow_and_update();

        loop {
            let retargeted = tokio::select! {
                _ = ticker.tick() => false,
                changed = target_rx.changed() => {
                    if changed.is_err() {
                        debug!("Countdown handle dropped, stopping tick task");
                        return;
                    }
                    true
                }
            };

            if retargeted {
                target = *target_rx.borrow_and_update();
                info!("Countdown retargeted to {}", target);
                continue;
            }

            // Under a second left floors to zero, which counts as reached
            let remaining = target.remaining_at(clock.now());
            if remaining.is_zero() {
                if !publisher.publish(Remaining::ZERO) {
                    return;
                }
                info!("Countdown reached {}, ticking stopped", target);
                break;
            }

            debug!(
                "Countdown tick: {}d {}h {}m {}s",
                remaining.days, remaining.hours, remaining.minutes, remaining.seconds
            );
            if !publisher.publish(remaining) {
                debug!("Snapshot publisher closed, stopping tick task");
                return;
            }
        }

        // Idle until a new target arrives
        if target_rx.changed().await.is_err() {
            debug!("Countdown handle dropped while idle");
            return;
        }
        info!("Countdown restarted against a new target");
    }
}
