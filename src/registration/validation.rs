//! Field rules for a registration draft

use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::RegistrationDraft;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_DIGITS: &str = "Phone number should be 10 digits";
pub const INSTITUTION_REQUIRED: &str = "Institution/Company is required";
pub const EVENTS_REQUIRED: &str = "Please select at least one event";

const PHONE_DIGIT_COUNT: usize = 10;

/// A validated field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Institution,
    Events,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Institution => "institution",
            Self::Events => "events",
        }
    }
}

/// Per-field error messages. A field with no entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop a field's message; returns true if one was set
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn set(&mut self, field: Field, message: Option<&'static str>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn required(value: &str, message: &'static str) -> Option<&'static str> {
    value.trim().is_empty().then_some(message)
}

fn check_email(email: &str) -> Option<&'static str> {
    required(email, EMAIL_REQUIRED).or_else(|| (!email_pattern().is_match(email)).then_some(EMAIL_INVALID))
}

fn check_phone(phone: &str) -> Option<&'static str> {
    required(phone, PHONE_REQUIRED).or_else(|| {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        (digits != PHONE_DIGIT_COUNT).then_some(PHONE_DIGITS)
    })
}

/// Check every field of `draft`, collecting all violations.
pub fn validate(draft: &RegistrationDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.set(Field::Name, required(&draft.name, NAME_REQUIRED));
    errors.set(Field::Email, check_email(&draft.email));
    errors.set(Field::Phone, check_phone(&draft.phone));
    errors.set(Field::Institution, required(&draft.institution, INSTITUTION_REQUIRED));
    errors.set(
        Field::Events,
        draft.selected_events.is_empty().then_some(EVENTS_REQUIRED),
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::EventId;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            institution: "XYZ College".to_string(),
            ..RegistrationDraft::default()
        };
        draft.selected_events.insert(EventId::Hackathon);
        draft
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_empty());
    }

    #[test]
    fn empty_draft_collects_every_violation() {
        let errors = validate(&RegistrationDraft::default());
        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![
                (Field::Name, NAME_REQUIRED),
                (Field::Email, EMAIL_REQUIRED),
                (Field::Phone, PHONE_REQUIRED),
                (Field::Institution, INSTITUTION_REQUIRED),
                (Field::Events, EVENTS_REQUIRED),
            ]
        );
    }

    #[test]
    fn blank_name_only_flags_name() {
        let draft = RegistrationDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn email_shape() {
        for (email, expected) in [
            ("asha@example.com", None),
            ("a@b.c", None),
            ("  ", Some(EMAIL_REQUIRED)),
            ("asha@example", Some(EMAIL_INVALID)),
            ("@example.com", Some(EMAIL_INVALID)),
            ("asha example.com", Some(EMAIL_INVALID)),
        ] {
            assert_eq!(check_email(email), expected, "email {email:?}");
        }
    }

    #[test]
    fn phone_counts_digits_after_stripping() {
        assert_eq!(check_phone("98765-43210"), None);
        assert_eq!(check_phone("+(987) 654 3210"), None);
        assert_eq!(check_phone("123456789"), Some(PHONE_DIGITS));
        assert_eq!(check_phone("98765432101"), Some(PHONE_DIGITS));
        assert_eq!(check_phone("phone"), Some(PHONE_DIGITS));
        assert_eq!(check_phone(""), Some(PHONE_REQUIRED));
    }

    #[test]
    fn validation_is_repeatable() {
        let draft = RegistrationDraft {
            email: "nope".to_string(),
            ..valid_draft()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }

    #[test]
    fn deselecting_last_event_requires_one_again() {
        let mut draft = valid_draft();
        draft.selected_events.remove(&EventId::Hackathon);
        assert_eq!(validate(&draft).get(Field::Events), Some(EVENTS_REQUIRED));
    }
}
