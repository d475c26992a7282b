//! Page container
//!
//! Owns the UI-only state and wires the registration view's success
//! callback to the confirmation modal.

pub mod fees;
pub mod schedule;
pub mod state;

pub use fees::{fee_for, Fee, FEES};
pub use schedule::{ScheduleView, Session, EVENT_DATE, SESSIONS};
pub use state::{confirmation_message, PageState, Tab};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::registration::{RegistrationView, Submitter};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Page {
    ui: Arc<Mutex<PageState>>,
    schedule: Mutex<ScheduleView>,
    registration: RegistrationView,
}

impl Page {
    pub fn mount(submitter: Submitter) -> Self {
        let ui = Arc::new(Mutex::new(PageState::default()));
        let modal_target = Arc::downgrade(&ui);
        let registration = RegistrationView::mount(submitter, move |outcome| {
            if let Some(ui) = modal_target.upgrade() {
                info!("Showing confirmation for {:?}", outcome.name);
                lock(&ui).show_confirmation(outcome.name);
            }
        });

        Self {
            ui,
            schedule: Mutex::new(ScheduleView::default()),
            registration,
        }
    }

    pub fn ui(&self) -> PageState {
        lock(&self.ui).clone()
    }

    pub fn select_tab(&self, tab: Tab) {
        lock(&self.ui).select_tab(tab);
    }

    pub fn toggle_theme(&self) -> bool {
        lock(&self.ui).toggle_theme()
    }

    pub fn dismiss_modal(&self) {
        lock(&self.ui).dismiss_modal();
    }

    pub fn schedule(&self) -> ScheduleView {
        *lock(&self.schedule)
    }

    pub fn toggle_session(&self, id: u32) {
        lock(&self.schedule).toggle(id);
    }

    pub fn registration(&self) -> &RegistrationView {
        &self.registration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{EventId, RegistrantType, TextField};

    #[test]
    fn tabs_and_theme() {
        let page = Page::mount(Submitter::default());
        assert_eq!(page.ui().active_tab, Tab::About);

        page.select_tab(Tab::Schedule);
        assert!(page.toggle_theme());
        assert!(!page.toggle_theme());
        assert_eq!(page.ui().active_tab, Tab::Schedule);
        page.select_tab(Tab::Register);
        assert_eq!(page.ui().active_tab, Tab::Register);

        page.toggle_session(3);
        assert_eq!(page.schedule().expanded().map(|s| s.id), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_registration_opens_modal() {
        let page = Page::mount(Submitter::default());
        page.registration().with_form(|form| {
            form.edit(TextField::Name, "Asha");
            form.edit(TextField::Email, "asha@example.com");
            form.edit(TextField::Phone, "9876543210");
            form.set_registrant_type(RegistrantType::Professional);
            form.edit(TextField::Institution, "Acme Labs");
            form.toggle_event(EventId::Startup, true);
        });

        let completion = page.registration().submit().unwrap();
        assert_eq!(page.ui().modal, None);

        completion.await.unwrap();
        assert_eq!(page.ui().modal.as_deref(), Some("Asha"));
        assert!(page
            .ui()
            .confirmation_message()
            .unwrap()
            .starts_with("Thank you, Asha!"));

        page.dismiss_modal();
        assert_eq!(page.ui().modal, None);
    }

    #[test]
    fn fees_by_registrant_type() {
        assert_eq!(fee_for(RegistrantType::Student).amount_inr, 500);
        assert_eq!(fee_for(RegistrantType::Professional).display, "₹1,000");
    }
}
