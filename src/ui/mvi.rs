//! Model-View-Intent primitives.
//!
//! Unidirectional data flow: an [`Intent`] (key press, timer firing) goes
//! through a [`Reducer`], which produces the next [`UiState`] the view
//! renders. The reducer is the only place state transitions happen.

/// Marker trait for state owned by a reducer.
///
/// State is replaced wholesale on each transition, so it must be cheap to
/// clone and comparable to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for actions fed into a reducer: user input, timer
/// callbacks, navigation.
pub trait Intent: Send + 'static {}

/// A pure transition function `(State, Intent) -> State`.
///
/// Reducers must not perform side effects; notification and scheduling
/// happen in the layer that dispatches to them.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
