//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms feature state in response to intents.
///
/// Must be a pure function: (State, Intent) -> State. Writing to shared
/// state is the driver's job.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply a sequence of intents in order.
    fn reduce_all<I>(state: Self::State, intents: I) -> Self::State
    where
        I: IntoIterator<Item = Self::Intent>,
    {
        intents.into_iter().fold(state, Self::reduce)
    }
}
