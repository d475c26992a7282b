//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Json, Response,
    },
};
use chrono::Utc;
use futures::stream::{Stream, StreamExt};
use tracing::{debug, info};

use crate::{
    error::AppError,
    page::{EVENT_DATE, FEES, SESSIONS},
    registration::{validate, RegistrationDraft},
    state::AppState,
};
use super::{
    requests::RegistrationRequest,
    responses::{
        CountdownResponse, EventsResponse, HealthResponse, RegistrationResponse,
        ScheduleResponse, ValidationResponse,
    },
};

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}

/// Handle GET /api/countdown - Current countdown snapshot
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    let countdown = &state.countdown;
    Json(CountdownResponse {
        target: countdown.target(),
        remaining: countdown.current(),
        finished: countdown.is_finished(),
        timestamp: Utc::now(),
    })
}

/// Handle GET /api/countdown/stream - One SSE event per published snapshot
pub async fn countdown_stream_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("Countdown stream subscriber connected");
    let events = state
        .countdown
        .snapshots()
        .map(|remaining| Event::default().event("tick").json_data(remaining));
    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /api/schedule - The day's programme
pub async fn schedule_handler() -> Json<ScheduleResponse> {
    Json(ScheduleResponse {
        date: EVENT_DATE,
        sessions: SESSIONS,
    })
}

/// Handle GET /api/events - Selectable events and fees
pub async fn events_handler() -> Json<EventsResponse> {
    Json(EventsResponse::catalogue(FEES))
}

/// Handle POST /api/registrations/validate - Field errors without submitting
pub async fn validate_handler(
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, AppError> {
    let Json(request) = payload?;
    let errors = validate(&RegistrationDraft::from(request));
    Ok(Json(ValidationResponse {
        valid: errors.is_empty(),
        errors,
    }))
}

/// Handle POST /api/registrations - Validate, wait out the simulated
/// latency, and confirm. Nothing is stored.
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let draft = RegistrationDraft::from(request);

    match state.submitter.submit(draft).await {
        Ok(outcome) => {
            info!("Registration endpoint confirmed {:?}", outcome.name);
            Ok(Json(RegistrationResponse::accepted(outcome)).into_response())
        }
        Err(rejection) => {
            debug!("Registration endpoint rejected draft: {:?}", rejection.errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(rejection)).into_response())
        }
    }
}
