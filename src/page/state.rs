//! UI-only page state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    About,
    Events,
    Schedule,
    Register,
}

/// Active tab, theme flag and the confirmation modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub active_tab: Tab,
    pub dark_mode: bool,
    /// Registrant name while the confirmation modal is open
    pub modal: Option<String>,
}

impl PageState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn show_confirmation(&mut self, name: String) {
        self.modal = Some(name);
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    pub fn confirmation_message(&self) -> Option<String> {
        self.modal.as_deref().map(confirmation_message)
    }
}

/// Text of the confirmation modal
pub fn confirmation_message(name: &str) -> String {
    format!("Thank you, {name}! Your registration for Technovation'25 has been confirmed.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_tab_is_selectable() {
        let mut state = PageState::default();
        state.select_tab(Tab::Register);
        assert_eq!(state.active_tab, Tab::Register);
        assert_eq!(serde_json::to_string(&Tab::Register).unwrap(), "\"register\"");
    }
}
