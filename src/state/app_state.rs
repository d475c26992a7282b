//! Shared server state

use std::{sync::Arc, time::Instant};

use crate::{
    config::Config,
    countdown::{Clock, Countdown},
    error::CountdownError,
    registration::Submitter,
};

/// State shared by every request handler
pub struct AppState {
    /// The hero countdown, one tick source for the whole server
    pub countdown: Countdown,
    pub submitter: Submitter,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(countdown: Countdown, submitter: Submitter) -> Self {
        Self {
            countdown,
            submitter,
            start_time: Instant::now(),
        }
    }

    /// Build from configuration, failing fast on a bad countdown target.
    /// Must be called inside a tokio runtime.
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Result<Self, CountdownError> {
        let target = config.countdown_target()?;
        Ok(Self::new(
            Countdown::start(target, config.tick_period(), clock),
            Submitter::new(config.submit_delay()),
        ))
    }

    /// Server uptime as a short human-readable string
    pub fn get_uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
