//! Registration draft and the catalogue of selectable events

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnknownEvent;

/// Who is registering. Only changes how the institution field is labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrantType {
    #[default]
    Student,
    Professional,
}

impl RegistrantType {
    pub fn institution_label(self) -> &'static str {
        match self {
            Self::Student => "Institution",
            Self::Professional => "Company",
        }
    }

    pub fn institution_placeholder(self) -> &'static str {
        match self {
            Self::Student => "University/College Name",
            Self::Professional => "Company Name",
        }
    }
}

/// Events a registrant can sign up for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventId {
    Hackathon,
    Workshops,
    Coding,
    Startup,
}

impl EventId {
    pub const ALL: [EventId; 4] = [
        EventId::Hackathon,
        EventId::Workshops,
        EventId::Coding,
        EventId::Startup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Workshops => "workshops",
            Self::Coding => "coding",
            Self::Startup => "startup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hackathon => "48-Hour Hackathon",
            Self::Workshops => "Technical Workshops",
            Self::Coding => "Coding Competitions",
            Self::Startup => "Startup Pitch",
        }
    }
}

impl FromStr for EventId {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress registration input, unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registrant_type: RegistrantType,
    pub institution: String,
    pub selected_events: BTreeSet<EventId>,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add events by identifier, skipping ones outside the catalogue.
    /// Returns how many identifiers were recognised.
    pub fn select_events<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut recognised = 0;
        for raw in ids {
            match raw.as_ref().parse::<EventId>() {
                Ok(id) => {
                    self.selected_events.insert(id);
                    recognised += 1;
                }
                Err(e) => debug!("Ignoring event selection: {}", e),
            }
        }
        recognised
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_events_are_dropped() {
        let mut draft = RegistrationDraft::new();
        let recognised = draft.select_events(["coding", "karaoke", "hackathon", "coding"]);

        assert_eq!(recognised, 3);
        assert_eq!(
            draft.selected_events.iter().copied().collect::<Vec<_>>(),
            vec![EventId::Hackathon, EventId::Coding]
        );
    }

    #[test]
    fn institution_wording_follows_registrant_type() {
        assert_eq!(RegistrantType::default(), RegistrantType::Student);
        assert_eq!(RegistrantType::Student.institution_label(), "Institution");
        assert_eq!(
            RegistrantType::Professional.institution_placeholder(),
            "Company Name"
        );
    }

    #[test]
    fn event_ids_round_trip_through_display() {
        for id in EventId::ALL {
            assert_eq!(id.to_string().parse::<EventId>(), Ok(id));
        }
        assert_eq!(
            "Hackathon".parse::<EventId>(),
            Err(UnknownEvent("Hackathon".to_string()))
        );
    }
}
