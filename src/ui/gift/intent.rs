//! Intents for the gift screen.

use crate::form::{FormField, Gender};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GiftIntent {
    /// User changed the text of a field.
    EditField { field: FormField, raw: String },

    SelectGender(Gender),

    /// Flip between man and woman.
    ToggleGender,

    FocusNext,
    FocusPrev,

    /// User asked for gift ideas. Moves Form to Loading.
    Submit,

    /// The service answered with suggestions.
    Succeeded { text: String },

    /// The service call failed.
    Failed { message: String },

    /// Leave the result screen, keeping the form values.
    TryAgain,

    /// Timer tick: spinner frame and alert countdown.
    AnimationTick,

    DismissAlert,
}

impl Intent for GiftIntent {}
