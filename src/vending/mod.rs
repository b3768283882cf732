//! Coin-operated candy machine built on the statechart engine.
//!
//! The machine waits for a coin, classifies it against the valid
//! denominations through automatic transitions, sells a candy on a half
//! turn of the handle and keeps running totals in its context.
//!
//! # Example
//!
//! ```rust
//! use vendchart::vending::{VendingConfig, VendingEvent, VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::interpreter(&VendingConfig::default()).unwrap();
//! machine.start().unwrap();
//!
//! machine.send(VendingEvent::AddCoin { value: 100 }).unwrap();
//! let state = machine.send(VendingEvent::HalfTurn).unwrap();
//!
//! assert!(state.matches(VendingState::SlotClosed));
//! assert_eq!(state.context().total_value, 100);
//! assert_eq!(state.context().num_sales, 1);
//! ```

mod actions;
mod candy;
mod config;
mod context;
mod event;
mod guards;
mod machine;
mod state;

pub use actions::{ActionError, VendingAction};
pub use candy::{Candy, Colour, Quality};
pub use config::{
    ConfigError, ConfigViolation, Denominations, SetupError, VendingConfig, DEFAULT_DENOMINATIONS,
};
pub use context::VendingContext;
pub use event::{EventKind, VendingEvent};
pub use guards::VendingGuard;
pub use machine::VendingMachine;
pub use state::VendingState;
