//! State/intent/reducer building blocks for the gift screen.
//!
//! Key presses and service outcomes become intents; a reducer folds each
//! intent into a fresh state; the renderer draws whatever state it is given.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
