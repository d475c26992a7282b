//! Form state as the registration view sees it

use tracing::debug;

use super::{validate, EventId, Field, FieldErrors, RegistrantType, RegistrationDraft};

/// Free-text inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Phone,
    Institution,
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        match field {
            TextField::Name => Field::Name,
            TextField::Email => Field::Email,
            TextField::Phone => Field::Phone,
            TextField::Institution => Field::Institution,
        }
    }
}

/// A draft plus the messages currently shown next to its inputs.
///
/// Editing a field hides its message straight away; the full rule set only
/// runs again on the next submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    errors: FieldErrors,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn edit(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Name => self.draft.name = value,
            TextField::Email => self.draft.email = value,
            TextField::Phone => self.draft.phone = value,
            TextField::Institution => self.draft.institution = value,
        }
        if self.errors.clear(field.into()) {
            debug!("Cleared {} error after edit", Field::from(field).as_str());
        }
    }

    pub fn set_registrant_type(&mut self, registrant_type: RegistrantType) {
        self.draft.registrant_type = registrant_type;
    }

    pub fn toggle_event(&mut self, id: EventId, checked: bool) {
        if checked {
            self.draft.selected_events.insert(id);
        } else {
            self.draft.selected_events.remove(&id);
        }
        self.errors.clear(Field::Events);
    }

    pub fn institution_label(&self) -> &'static str {
        self.draft.registrant_type.institution_label()
    }

    pub fn institution_placeholder(&self) -> &'static str {
        self.draft.registrant_type.institution_placeholder()
    }

    /// Re-run every rule, replacing the shown messages. True when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.draft);
        self.errors.is_empty()
    }
}
