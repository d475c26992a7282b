//! Technovation - countdown and registration service for the symposium site
//!
//! This library holds the two logic-bearing pieces of the site, the hero
//! countdown and the registration form, plus the page container and the
//! HTTP surface the browser talks to.

pub mod api;
pub mod config;
pub mod countdown;
pub mod error;
pub mod page;
pub mod registration;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use countdown::{Countdown, CountdownTarget, Remaining};
pub use registration::{validate, RegistrationDraft, Submitter};
pub use state::AppState;
pub use utils::signals::shutdown_signal;
