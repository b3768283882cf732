//! Core statechart types and logic.
//!
//! This module contains the pure functional core of the engine:
//! - State and event definitions via the `State` and `Event` traits
//! - The `Statechart` trait describing a full transition table
//! - Automatic-transition resolution
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or mutates shared data.

mod chart;
mod guard;
mod history;
mod state;

pub use chart::{Handler, Statechart};
pub use guard::{first_enabled, Automatic};
pub use history::{StateHistory, StateTransition};
pub use state::{Event, State};
