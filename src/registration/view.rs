//! A mounted registration form and its deferred completion

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{FieldErrors, Outcome, RegistrationForm, Rejection, Submitter};

type SuccessCallback = Arc<dyn Fn(Outcome) + Send + Sync>;

struct ViewState {
    form: RegistrationForm,
    pending: bool,
    confirmation: Option<Outcome>,
    on_success: SuccessCallback,
}

/// Registration form bound to a success callback.
///
/// The completion scheduled by [`RegistrationView::submit`] only holds a
/// weak reference to the view, so once the view is dropped the callback is
/// never invoked.
pub struct RegistrationView {
    state: Arc<Mutex<ViewState>>,
    submitter: Submitter,
}

fn lock(state: &Mutex<ViewState>) -> MutexGuard<'_, ViewState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RegistrationView {
    pub fn mount<F>(submitter: Submitter, on_success: F) -> Self
    where
        F: Fn(Outcome) + Send + Sync + 'static,
    {
        Self {
            state: Arc::new(Mutex::new(ViewState {
                form: RegistrationForm::new(),
                pending: false,
                confirmation: None,
                on_success: Arc::new(on_success),
            })),
            submitter,
        }
    }

    /// Run `f` against the form, e.g. to apply user input
    pub fn with_form<R>(&self, f: impl FnOnce(&mut RegistrationForm) -> R) -> R {
        f(&mut lock(&self.state).form)
    }

    pub fn errors(&self) -> FieldErrors {
        lock(&self.state).form.errors().clone()
    }

    /// True between an accepted submit and its completion
    pub fn is_pending(&self) -> bool {
        lock(&self.state).pending
    }

    /// The accepted outcome once the deferred completion has run
    pub fn confirmation(&self) -> Option<Outcome> {
        lock(&self.state).confirmation.clone()
    }

    pub fn dismiss_confirmation(&self) {
        lock(&self.state).confirmation = None;
    }

    /// Validate the form. On failure the messages are shown and returned;
    /// on success the acceptance is scheduled and its task handle returned.
    /// Must be called inside a tokio runtime.
    pub fn submit(&self) -> Result<JoinHandle<()>, Rejection> {
        let draft = {
            let mut state = lock(&self.state);
            if !state.form.validate() {
                return Err(Rejection {
                    errors: state.form.errors().clone(),
                });
            }
            state.pending = true;
            state.form.draft().clone()
        };

        let view = Arc::downgrade(&self.state);
        let submitter = self.submitter;
        Ok(tokio::spawn(async move {
            let outcome = match submitter.submit(draft).await {
                Ok(outcome) => outcome,
                Err(rejection) => {
                    warn!("Draft rejected after validation passed: {:?}", rejection.errors);
                    return;
                }
            };

            let Some(state) = view.upgrade() else {
                debug!("Registration view torn down before acceptance, dropping outcome");
                return;
            };
            let on_success = {
                let mut state = lock(&state);
                state.pending = false;
                state.confirmation = Some(outcome.clone());
                Arc::clone(&state.on_success)
            };
            on_success(outcome);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{EventId, Field, TextField};
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    fn fill(form: &mut RegistrationForm) {
        form.edit(TextField::Name, "Asha");
        form.edit(TextField::Email, "asha@example.com");
        form.edit(TextField::Phone, "98765-43210");
        form.edit(TextField::Institution, "XYZ College");
        form.toggle_event(EventId::Hackathon, true);
    }

    fn counting_view() -> (RegistrationView, Arc<Mutex<Vec<String>>>) {
        let accepted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&accepted);
        let view = RegistrationView::mount(Submitter::default(), move |outcome: Outcome| {
            sink.lock().unwrap().push(outcome.name);
        });
        (view, accepted)
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_submit_surfaces_errors_and_schedules_nothing() {
        let (view, accepted) = counting_view();

        let rejection = view.submit().unwrap_err();

        assert_eq!(rejection.errors.len(), 5);
        assert_eq!(view.errors(), rejection.errors);
        assert!(!view.is_pending());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(accepted.lock().unwrap().is_empty());
        assert_eq!(view.confirmation(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submit_calls_back_after_delay() {
        let (view, accepted) = counting_view();
        view.with_form(fill);

        let completion = view.submit().unwrap();
        assert!(view.is_pending());
        assert!(accepted.lock().unwrap().is_empty());
        assert_eq!(view.confirmation(), None);

        completion.await.unwrap();
        assert!(!view.is_pending());
        assert_eq!(*accepted.lock().unwrap(), vec!["Asha".to_string()]);
        assert_eq!(
            view.confirmation(),
            Some(Outcome {
                name: "Asha".to_string()
            })
        );

        view.dismiss_confirmation();
        assert_eq!(view.confirmation(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_before_delay_makes_completion_a_no_op() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let view = RegistrationView::mount(Submitter::default(), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        view.with_form(fill);

        let completion = view.submit().unwrap();
        let state = Arc::downgrade(&view.state);
        drop(view);

        completion.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(state.upgrade().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn edits_after_rejection_clear_messages() {
        let (view, _) = counting_view();
        view.submit().unwrap_err();

        view.with_form(|form| form.edit(TextField::Email, "asha@"));
        assert!(!view.errors().contains(Field::Email));
        assert!(view.errors().contains(Field::Name));
    }
}
