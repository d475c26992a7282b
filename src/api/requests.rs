//! API request payloads

use serde::Deserialize;
use tracing::warn;

use crate::registration::{RegistrantType, RegistrationDraft};

/// Registration form as posted by the browser
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub registrant_type: RegistrantType,
    pub institution: String,
    pub events: Vec<String>,
}

impl From<RegistrationRequest> for RegistrationDraft {
    fn from(request: RegistrationRequest) -> Self {
        let mut draft = RegistrationDraft {
            name: request.name,
            email: request.email,
            phone: request.phone,
            registrant_type: request.registrant_type,
            institution: request.institution,
            ..RegistrationDraft::default()
        };

        let submitted = request.events.len();
        let recognised = draft.select_events(&request.events);
        if recognised < submitted {
            warn!(
                "Dropped {} unrecognised event selections",
                submitted - recognised
            );
        }
        draft
    }
}
