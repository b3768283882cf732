//! State and event traits for statechart definitions.
//!
//! States form a closed set; exactly one is current at any time. Events are
//! immutable inputs whose kind name is used for logging, history and error
//! reporting.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for statechart states.
///
/// All methods are pure. States are small `Copy` values describing the
/// current position of a machine.
///
/// # Example
///
/// ```rust
/// use vendchart::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "OPEN",
///             Self::Closed => "CLOSED",
///             Self::Welded => "WELDED",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "OPEN");
/// assert!(DoorState::Welded.is_final());
/// ```
pub trait State:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// No transition may leave a final state. Default implementation
    /// returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for events fed to an interpreter.
///
/// Only the kind is required by the engine; payloads are read by guards and
/// actions of the concrete chart.
pub trait Event: Clone + Debug {
    /// Name of the event kind, e.g. `ADD_COIN`.
    fn kind_name(&self) -> &str;
}
