//! Statechart definitions: the transition table seen by the interpreter.
//!
//! A chart is a set of pure lookups (`entry_actions`, `exit_actions`,
//! `automatic`, `handler`) plus the guard evaluator and the action executor. Concrete
//! charts implement these with an exhaustive `match` over their state,
//! event, guard and action enums.

use super::guard::Automatic;
use super::state::{Event, State};
use std::fmt::Debug;

/// Event handler declared for a (state, event kind) pair.
///
/// The guard defaults to "always true". Actions run in declared order
/// before the state changes to `target`, which may equal the source state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handler<S, G: 'static, A: 'static> {
    pub guard: Option<G>,
    pub actions: &'static [A],
    pub target: S,
}

impl<S, G: 'static, A: 'static> Handler<S, G, A> {
    /// Unguarded handler with no actions.
    pub fn to(target: S) -> Self {
        Self {
            guard: None,
            actions: &[],
            target,
        }
    }

    /// Replace the action list.
    pub fn with_actions(mut self, actions: &'static [A]) -> Self {
        self.actions = actions;
        self
    }

    /// Only accept the event when `guard` holds.
    pub fn when(mut self, guard: G) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// A complete machine definition.
///
/// Guards must be pure and total. Actions follow the functional update
/// pattern: they receive the context by value and return the replacement,
/// or fail with the chart's typed error.
pub trait Statechart {
    type State: State + 'static;
    type Event: Event;
    type Context: Clone + Debug;
    type Guard: Copy + Debug + 'static;
    type Action: Copy + Debug + 'static;
    type Error: std::error::Error + 'static;

    /// Every state of the chart, used for static validation.
    fn states(&self) -> &'static [Self::State];

    fn initial_state(&self) -> Self::State;

    fn initial_context(&self) -> Self::Context;

    /// Actions run each time `state` is entered.
    fn entry_actions(&self, _state: Self::State) -> &'static [Self::Action] {
        &[]
    }

    /// Actions run each time `state` is left for a different state, before
    /// the handler's own actions.
    fn exit_actions(&self, _state: Self::State) -> &'static [Self::Action] {
        &[]
    }

    /// Automatic transitions of `state`, in evaluation order.
    fn automatic(&self, _state: Self::State) -> &'static [Automatic<Self::State, Self::Guard>] {
        &[]
    }

    /// Handler for `event` in `state`, or `None` to ignore the event.
    fn handler(
        &self,
        state: Self::State,
        event: &Self::Event,
    ) -> Option<Handler<Self::State, Self::Guard, Self::Action>>;

    /// Evaluate a guard against the context and the pending event.
    fn check_guard(
        &self,
        guard: Self::Guard,
        context: &Self::Context,
        event: Option<&Self::Event>,
    ) -> bool;

    /// Apply an action, returning the replacement context.
    fn apply_action(
        &self,
        action: Self::Action,
        context: Self::Context,
        event: Option<&Self::Event>,
    ) -> Result<Self::Context, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Gate {
        Open,
    }

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Step {
        Log,
        Count,
    }

    #[test]
    fn handler_defaults_to_unguarded_without_actions() {
        let handler: Handler<u8, Gate, Step> = Handler::to(3);

        assert_eq!(handler.target, 3);
        assert!(handler.guard.is_none());
        assert!(handler.actions.is_empty());
    }

    #[test]
    fn handler_builders_compose() {
        let handler: Handler<u8, Gate, Step> = Handler::to(1)
            .with_actions(&[Step::Count, Step::Log])
            .when(Gate::Open);

        assert_eq!(handler.guard, Some(Gate::Open));
        assert_eq!(handler.actions, &[Step::Count, Step::Log]);
    }
}
