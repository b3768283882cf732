//! State transition history tracking.
//!
//! Provides immutable tracking of the state changes an interpreter has
//! committed, following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed state change.
///
/// `event` names the event kind that caused the change, or is `None` for
/// changes made while starting the interpreter.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Kind of the event being processed when the change happened
    pub event: Option<String>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Build a record stamped with the current time.
    pub fn now(from: S, to: S, event: Option<&str>) -> Self {
        Self {
            from,
            to,
            event: event.map(str::to_string),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// History is immutable - `record` and `extend` return a new history with
/// the transitions added.
///
/// # Example
///
/// ```rust
/// use vendchart::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light { Red, Green }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "RED",
///             Self::Green => "GREEN",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(Light::Red, Light::Green, Some("TIMER")))
///     .record(StateTransition::now(Light::Green, Light::Red, Some("TIMER")));
///
/// assert_eq!(history.get_path(), vec![&Light::Red, &Light::Green, &Light::Red]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - the existing history is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a batch of transitions in order, returning a new history.
    pub fn extend<I>(&self, batch: I) -> Self
    where
        I: IntoIterator<Item = StateTransition<S>>,
    {
        let mut transitions = self.transitions.clone();
        transitions.extend(batch);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }
}
