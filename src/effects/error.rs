//! Errors surfaced by a running interpreter.

use super::interpreter::Status;
use thiserror::Error;

/// Errors that can occur while starting an interpreter or sending it events.
///
/// An event with no handler in the current state is not an error; it is
/// ignored and never produces one of these.
#[derive(Debug, Error)]
pub enum InterpreterError<E: std::error::Error + 'static> {
    /// `send` was called before `start` or after `stop`.
    #[error("interpreter is not running (status: {status:?})")]
    NotRunning { status: Status },

    #[error("interpreter has already been started")]
    AlreadyStarted,

    /// An action rejected the event. Nothing from the event was committed.
    #[error("action failed in state '{state}' while handling {event}: {source}")]
    Action {
        state: String,
        event: String,
        #[source]
        source: E,
    },

    /// Automatic transitions kept firing past the configured limit.
    #[error("automatic transitions from '{state}' did not settle within {limit} steps")]
    SettleLimitExceeded { state: String, limit: usize },
}

impl<E: std::error::Error + 'static> InterpreterError<E> {
    /// True when an action signalled a contract violation.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Action { .. })
    }

    /// The chart's own error, if an action failed.
    pub fn action_error(&self) -> Option<&E> {
        match self {
            Self::Action { source, .. } => Some(source),
            _ => None,
        }
    }
}
