//! Unidirectional state management primitives.
//!
//! Screens keep their state in plain values that only a reducer may
//! transform: an intent (user action or API settle) goes in, a new
//! state comes out. Rendering reads state and never mutates it.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

/// State owned by a screen or flow.
///
/// Cloneable so reducers can take ownership and hand back a new value,
/// comparable so tests can assert on whole states at once.
pub trait FlowState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or system event that may change state.
pub trait Intent: Send + 'static {}

/// Pure transition function from `(State, Intent)` to `State`.
///
/// The reducer is the only place where state transitions happen.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FlowState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
