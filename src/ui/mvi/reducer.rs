use super::intent::Intent;
use super::state::UiState;

/// Folds one intent into a state.
///
/// `reduce` never performs I/O. A caller that needs a side effect (the
/// gift request) dispatches first and then looks at the resulting state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
