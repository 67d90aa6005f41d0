use crate::form::FormField;
use crate::ui::gift::intent::GiftIntent;
use crate::ui::gift::state::{GiftState, ViewState, FAILURE_TITLE, INVALID_INPUT_TITLE};
use crate::ui::mvi::Reducer;

pub struct GiftReducer;

impl Reducer for GiftReducer {
    type State = GiftState;
    type Intent = GiftIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GiftIntent::EditField { field, raw } => {
                if state.view.is_form() {
                    // A draft that does not coerce leaves the input value alone.
                    let _ = state.input.update_field(field, &raw);
                    state.drafts.set(field, raw);
                }
                state
            }
            GiftIntent::SelectGender(gender) => {
                if state.view.is_form() {
                    state.input.select_gender(gender);
                }
                state
            }
            GiftIntent::ToggleGender => {
                if state.view.is_form() {
                    let gender = state.input.gender.toggled();
                    state.input.select_gender(gender);
                }
                state
            }
            GiftIntent::FocusNext => {
                if state.view.is_form() {
                    state.focus = state.focus.next();
                }
                state
            }
            GiftIntent::FocusPrev => {
                if state.view.is_form() {
                    state.focus = state.focus.prev();
                }
                state
            }
            GiftIntent::Submit => {
                if !state.view.is_form() {
                    return state;
                }
                let invalid = state.drafts.invalid_fields();
                if invalid.is_empty() {
                    state.alert = None;
                    state.view = ViewState::Loading { animation_tick: 0 };
                } else {
                    state.raise_alert(INVALID_INPUT_TITLE, invalid_fields_message(&invalid));
                }
                state
            }
            GiftIntent::Succeeded { text } => {
                if state.view.is_loading() {
                    state.view = ViewState::Result { text };
                }
                state
            }
            GiftIntent::Failed { message } => {
                if state.view.is_loading() {
                    state.view = ViewState::Form;
                    state.raise_alert(FAILURE_TITLE, message);
                }
                state
            }
            GiftIntent::TryAgain => {
                if matches!(state.view, ViewState::Result { .. }) {
                    state.view = ViewState::Form;
                }
                state
            }
            GiftIntent::AnimationTick => {
                if let ViewState::Loading { animation_tick } = &mut state.view {
                    *animation_tick = animation_tick.wrapping_add(1);
                }
                state.alert = state.alert.take().and_then(|mut alert| {
                    alert.ticks_left = alert.ticks_left.saturating_sub(1);
                    (alert.ticks_left > 0).then_some(alert)
                });
                state
            }
            GiftIntent::DismissAlert => {
                state.alert = None;
                state
            }
        }
    }
}

fn invalid_fields_message(fields: &[FormField]) -> String {
    let labels: Vec<&str> = fields.iter().map(|f| f.label()).collect();
    if labels.len() == 1 {
        format!("{} must be a whole number", labels[0])
    } else {
        format!("{} must be whole numbers", labels.join(", "))
    }
}
