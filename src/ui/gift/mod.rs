mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GiftIntent;
pub use reducer::GiftReducer;
pub use state::{
    Alert, Focus, GiftState, ViewState, DEFAULT_ALERT_TICKS, FAILURE_TITLE, INVALID_INPUT_TITLE,
};
pub use view::{render_alert, render_body, SPINNER_FRAMES};
