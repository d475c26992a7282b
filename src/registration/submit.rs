//! Simulated registration submission

use std::time::Duration;

use serde::Serialize;
use tokio::time::sleep;
use tracing::{debug, info};

use super::{validate, FieldErrors, RegistrationDraft};

/// Stand-in for backend latency. Nothing is sent anywhere.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// An accepted registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub name: String,
}

/// A draft that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub errors: FieldErrors,
}

/// Accepts valid drafts after a fixed delay. Accepted registrations are
/// handed back to the caller and not kept.
#[derive(Debug, Clone, Copy)]
pub struct Submitter {
    delay: Duration,
}

impl Default for Submitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Submitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validate without waiting
    pub fn check(&self, draft: &RegistrationDraft) -> Result<(), Rejection> {
        let errors = validate(draft);
        if errors.is_empty() {
            Ok(())
        } else {
            debug!("Registration rejected with {} field errors", errors.len());
            Err(Rejection { errors })
        }
    }

    /// Validate, then wait out the simulated latency and accept
    pub async fn submit(&self, draft: RegistrationDraft) -> Result<Outcome, Rejection> {
        self.check(&draft)?;

        sleep(self.delay).await;

        info!(
            "Registration accepted for {:?} ({} events)",
            draft.name,
            draft.selected_events.len()
        );
        Ok(Outcome { name: draft.name })
    }
}
