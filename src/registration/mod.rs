//! Registration module
//!
//! [`validate`] is the pure rule set over a [`RegistrationDraft`].
//! [`Submitter`] wraps it with the simulated acceptance delay, and
//! [`RegistrationView`] is the mounted form that reports acceptance through
//! a callback.

pub mod draft;
pub mod form;
pub mod submit;
pub mod validation;
pub mod view;

// Re-export main types
pub use draft::{EventId, RegistrantType, RegistrationDraft};
pub use form::{RegistrationForm, TextField};
pub use submit::{Outcome, Rejection, Submitter, DEFAULT_SUBMIT_DELAY};
pub use validation::{validate, Field, FieldErrors};
pub use view::RegistrationView;
