//! Vendchart: a statechart engine driving a coin-operated candy machine.
//!
//! The engine follows a "pure core, imperative shell" split. The core
//! describes a machine as a transition table of tagged variants dispatched
//! through `match`; the shell interprets it one event at a time, applying
//! actions to a copy of the context and committing only when the whole
//! event succeeded.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed enums implementing the `State` and `Event` traits
//! - **Statechart**: entry actions, automatic (guard-only) transitions and
//!   event handlers for every state
//! - **Guards**: pure predicates over the context and the pending event
//! - **Actions**: functional updates of the context that may fail with a
//!   typed contract violation
//! - **Interpreter**: `start`, `send`, `stop` and `on_transition` observers
//!
//! # Example
//!
//! ```rust
//! use vendchart::vending::{VendingConfig, VendingEvent, VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::interpreter(&VendingConfig::default()).unwrap();
//! machine.start().unwrap();
//!
//! let state = machine.send(VendingEvent::HalfTurn).unwrap();
//! assert!(state.matches(VendingState::SlotClosed));
//! assert_eq!(state.context().num_sales, 0);
//!
//! let err = machine.send(VendingEvent::Tamper).unwrap_err();
//! assert!(err.is_contract_violation());
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod logging;
pub mod vending;

// Re-export commonly used types
pub use builder::{BuildError, InterpreterBuilder};
pub use self::core::{Event, State, StateHistory, StateTransition, Statechart};
pub use effects::{Interpreter, InterpreterError, Snapshot, Status};
