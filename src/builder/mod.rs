//! Builder API for constructing interpreters.
//!
//! This module provides the fluent `InterpreterBuilder`, static chart
//! validation and the `state_enum!` macro for declaring state sets with
//! minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;
pub mod validate;

pub use error::BuildError;
pub use machine::{InterpreterBuilder, DEFAULT_MAX_SETTLE_STEPS};
pub use validate::{validate_chart, ChartViolation};
