//! Settled machine snapshots handed to callers and observers.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// The machine after an event has been processed to quiescence.
///
/// Snapshots are owned copies: later events never change a snapshot that
/// has already been handed out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Serialize",
    deserialize = "C: serde::de::DeserializeOwned"
))]
pub struct Snapshot<S: State, C> {
    /// Current state
    pub value: S,
    /// Context after every action of the event ran
    pub context: C,
    /// Kind of the event that produced this snapshot (`None` at start)
    pub event: Option<String>,
    /// Whether the state value changed while processing the event
    pub changed: bool,
}

impl<S: State, C> Snapshot<S, C> {
    /// Check whether the machine is in `state`.
    pub fn matches(&self, state: S) -> bool {
        self.value == state
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn is_final(&self) -> bool {
        self.value.is_final()
    }
}
