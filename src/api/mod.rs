//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and the request and
//! response structures they exchange with the browser.

pub mod handlers;
pub mod requests;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/countdown", get(countdown_handler))
        .route("/api/countdown/stream", get(countdown_stream_handler))
        .route("/api/schedule", get(schedule_handler))
        .route("/api/events", get(events_handler))
        .route("/api/registrations", post(register_handler))
        .route("/api/registrations/validate", post(validate_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
