//! The one-day programme

use serde::Serialize;

pub const EVENT_DATE: &str = "May 15, 2025";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: u32,
    pub time: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub speaker: &'static str,
}

pub const SESSIONS: &[Session] = &[
    Session {
        id: 1,
        time: "09:00 AM - 10:00 AM",
        title: "Opening Ceremony",
        description: "Welcome address by the Dean and introduction to Technovation'25.",
        location: "Main Auditorium",
        speaker: "Dr. Sarah Johnson, Dean of Engineering",
    },
    Session {
        id: 2,
        time: "10:30 AM - 12:30 PM",
        title: "Code Odyssey",
        description: "A competitive programming contest where participants solve complex algorithmic challenges.",
        location: "Lab Complex",
        speaker: "Organized by Programming Club",
    },
    Session {
        id: 3,
        time: "12:30 PM - 01:30 PM",
        title: "Lunch Break",
        description: "Networking lunch with refreshments provided for all participants.",
        location: "Campus Cafeteria",
        speaker: "N/A",
    },
    Session {
        id: 4,
        time: "02:00 PM - 04:00 PM",
        title: "Workshop: AI & Machine Learning",
        description: "Learn about the latest advancements in AI and hands-on experience with machine learning models.",
        location: "Seminar Hall 1",
        speaker: "Dr. Maya Patel, AI Researcher",
    },
    Session {
        id: 5,
        time: "04:00 PM - 05:00 PM",
        title: "Tech Startup Showcase",
        description: "Innovative startups present their products and solutions to attendees and potential investors.",
        location: "Exhibition Hall",
        speaker: "Various Startup Founders",
    },
    Session {
        id: 6,
        time: "05:30 PM - 06:30 PM",
        title: "Panel Discussion: Future of Tech",
        description: "Industry experts discuss emerging technologies and future career opportunities.",
        location: "Conference Hall",
        speaker: "Panel of Industry Experts",
    },
    Session {
        id: 7,
        time: "07:00 PM - 09:00 PM",
        title: "Networking Dinner & Cultural Event",
        description: "Dinner followed by cultural performances from university students.",
        location: "Campus Grounds",
        speaker: "Cultural Committee",
    },
];

pub fn session(id: u32) -> Option<&'static Session> {
    SESSIONS.iter().find(|session| session.id == id)
}

/// Which schedule entry is expanded; at most one at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleView {
    expanded: Option<u32>,
}

impl ScheduleView {
    pub fn expanded(&self) -> Option<&'static Session> {
        self.expanded.and_then(session)
    }

    /// Expand `id`, or collapse it if it is already expanded
    pub fn toggle(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn programme_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = SESSIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn toggle_expands_one_entry_at_a_time() {
        let mut view = ScheduleView::default();
        assert!(view.expanded().is_none());

        view.toggle(2);
        assert_eq!(view.expanded().map(|s| s.title), Some("Code Odyssey"));

        view.toggle(4);
        assert_eq!(view.expanded().map(|s| s.id), Some(4));

        view.toggle(4);
        assert!(view.expanded().is_none());
    }
}
