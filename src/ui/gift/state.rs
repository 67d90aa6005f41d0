//! State of the gift form screen.

use crate::form::{FieldDrafts, FormField, FormInput};
use crate::ui::mvi::UiState;

/// Alert lifetime in ticks when none is configured.
pub const DEFAULT_ALERT_TICKS: u16 = 40;

/// Title of the alert raised when the service call fails.
pub const FAILURE_TITLE: &str = "Couldn't generate ideas";

/// Title of the alert raised when submit is refused.
pub const INVALID_INPUT_TITLE: &str = "Check the form";

/// Which screen is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Editing the form.
    #[default]
    Form,

    /// A request is in flight.
    Loading {
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The service answered.
    Result { text: String },
}

impl ViewState {
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Form)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn result_text(&self) -> Option<&str> {
        match self {
            Self::Result { text } => Some(text),
            _ => None,
        }
    }
}

/// Focusable controls of the form, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Quantity,
    Age,
    Gender,
    PriceMin,
    PriceMax,
    Hobbies,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::Quantity,
        Focus::Age,
        Focus::Gender,
        Focus::PriceMin,
        Focus::PriceMax,
        Focus::Hobbies,
        Focus::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The text field behind this control, if it is one.
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::Quantity => Some(FormField::Quantity),
            Focus::Age => Some(FormField::Age),
            Focus::PriceMin => Some(FormField::PriceMin),
            Focus::PriceMax => Some(FormField::PriceMax),
            Focus::Hobbies => Some(FormField::Hobbies),
            Focus::Gender | Focus::Submit => None,
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Transient, non-blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Remaining ticks before the alert hides itself.
    pub ticks_left: u16,
}

/// Everything the gift screen needs to render.
///
/// `input` sits beside `view` rather than inside it so the values survive
/// Loading and Result untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftState {
    pub input: FormInput,
    pub drafts: FieldDrafts,
    pub view: ViewState,
    pub focus: Focus,
    pub alert: Option<Alert>,
    /// Lifetime given to new alerts.
    pub alert_ticks: u16,
}

impl Default for GiftState {
    fn default() -> Self {
        Self::with_alert_ticks(DEFAULT_ALERT_TICKS)
    }
}

impl UiState for GiftState {}

impl GiftState {
    pub fn with_alert_ticks(alert_ticks: u16) -> Self {
        let input = FormInput::default();
        Self {
            drafts: FieldDrafts::from_input(&input),
            input,
            view: ViewState::Form,
            focus: Focus::default(),
            alert: None,
            alert_ticks,
        }
    }

    /// Raw text for `field`, as the user typed it.
    pub fn draft(&self, field: FormField) -> &str {
        self.drafts.get(field)
    }

    pub fn is_field_valid(&self, field: FormField) -> bool {
        self.drafts.is_valid(field)
    }

    pub(crate) fn raise_alert(&mut self, title: &str, message: String) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message,
            ticks_left: self.alert_ticks,
        });
    }
}
