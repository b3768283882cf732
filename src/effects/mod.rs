//! Effectful runtime around the pure core.
//!
//! The interpreter owns the current state and context, runs chart actions
//! (which may log or draw random numbers) and notifies observers.
//!
//! # Key Concepts
//!
//! - **Interpreter**: processes one event at a time, to quiescence
//! - **Snapshot**: immutable view of the settled state and context
//! - **Errors**: contract violations are typed values, never panics

mod error;
mod interpreter;
mod snapshot;

pub use error::InterpreterError;
pub use interpreter::{Interpreter, Observer, Status};
pub use snapshot::Snapshot;
