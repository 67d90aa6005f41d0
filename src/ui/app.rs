use std::sync::mpsc::Sender;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::form::{FormField, Gender};
use crate::service::{GiftOutcome, GiftService};
use crate::ui::events::AppEvent;
use crate::ui::gift::{GiftIntent, GiftReducer, GiftState, ViewState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View controller: owns the gift screen state and runs the service call.
pub struct App {
    should_quit: bool,
    /// Gift screen state (MVI pattern).
    state: GiftState,
    service: Arc<dyn GiftService>,
    /// Where request outcomes are delivered.
    events: Sender<AppEvent>,
    runtime: Handle,
}

impl App {
    pub fn new(service: Arc<dyn GiftService>, events: Sender<AppEvent>, runtime: Handle) -> Self {
        Self {
            should_quit: false,
            state: GiftState::default(),
            service,
            events,
            runtime,
        }
    }

    pub fn with_alert_ticks(mut self, alert_ticks: u16) -> Self {
        self.state.alert_ticks = alert_ticks;
        self
    }

    pub fn state(&self) -> &GiftState {
        &self.state
    }

    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch an intent to the gift reducer.
    pub fn dispatch(&mut self, intent: GiftIntent) {
        dispatch_mvi!(self, state, GiftReducer, intent);
    }

    pub fn update_field(&mut self, field: FormField, raw: impl Into<String>) {
        self.dispatch(GiftIntent::EditField {
            field,
            raw: raw.into(),
        });
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.dispatch(GiftIntent::SelectGender(gender));
    }

    /// Move to Loading and start the request.
    ///
    /// Does nothing unless the form is showing, so at most one request is
    /// ever in flight.
    pub fn submit(&mut self) {
        if !self.state.view.is_form() {
            return;
        }
        self.dispatch(GiftIntent::Submit);
        if !self.state.view.is_loading() {
            tracing::debug!("Submit refused: form has invalid fields");
            return;
        }

        let input = self.state.input.clone();
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tracing::info!(
            service = %service.name(),
            quantity = input.quantity,
            gender = %input.gender,
            "Requesting gift ideas"
        );

        self.runtime.spawn(async move {
            let outcome = service.generate(&input).await;
            if events.send(AppEvent::Gifts(outcome)).is_err() {
                tracing::trace!("Gift outcome dropped (UI gone)");
            }
        });
    }

    /// Apply the outcome of the in-flight request.
    pub fn on_gifts(&mut self, outcome: GiftOutcome) {
        match outcome {
            Ok(text) => self.dispatch(GiftIntent::Succeeded { text }),
            Err(err) => {
                tracing::warn!(error = %err, "Gift request failed");
                self.dispatch(GiftIntent::Failed {
                    message: err.to_string(),
                });
            }
        }
    }

    pub fn try_again(&mut self) {
        self.dispatch(GiftIntent::TryAgain);
    }

    pub fn on_tick(&mut self) {
        self.dispatch(GiftIntent::AnimationTick);
    }

    /// Replace the focused field's text using `edit`.
    ///
    /// No-op when focus is not on a text field or the form is not showing.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if self.state.view != ViewState::Form {
            return;
        }
        let Some(field) = self.state.focus.field() else {
            return;
        };
        let mut raw = self.state.draft(field).to_string();
        edit(&mut raw);
        self.update_field(field, raw);
    }
}
