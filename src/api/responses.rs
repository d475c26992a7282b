//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    countdown::{CountdownTarget, Remaining},
    page::{confirmation_message, Fee, Session},
    registration::{EventId, FieldErrors, Outcome},
};

/// Countdown snapshot for the hero section
#[derive(Debug, Clone, Serialize)]
pub struct CountdownResponse {
    pub target: CountdownTarget,
    pub remaining: Remaining,
    pub finished: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub date: &'static str,
    pub sessions: &'static [Session],
}

#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    pub id: EventId,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventSummary>,
    pub fees: &'static [Fee],
}

impl EventsResponse {
    pub fn catalogue(fees: &'static [Fee]) -> Self {
        Self {
            events: EventId::ALL
                .into_iter()
                .map(|id| EventSummary {
                    id,
                    label: id.label(),
                })
                .collect(),
            fees,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: FieldErrors,
}

/// Body of an accepted registration
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub status: String,
    pub name: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl RegistrationResponse {
    pub fn accepted(outcome: Outcome) -> Self {
        Self {
            status: "accepted".to_string(),
            message: confirmation_message(&outcome.name),
            name: outcome.name,
            timestamp: Utc::now(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
