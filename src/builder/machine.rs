//! Builder for constructing interpreters.

use crate::builder::error::BuildError;
use crate::builder::validate::validate_chart;
use crate::core::Statechart;
use crate::effects::{Interpreter, Observer, Snapshot};
use stillwater::validation::Validation;
use tracing::debug;

/// Default cap on automatic transitions fired while settling one event.
pub const DEFAULT_MAX_SETTLE_STEPS: usize = 32;

/// Builder for constructing interpreters with a fluent API.
///
/// The chart is validated in `build`; a chart whose automatic transitions
/// could loop is refused rather than run.
pub struct InterpreterBuilder<C: Statechart> {
    chart: C,
    context: Option<C::Context>,
    max_settle_steps: usize,
    observers: Vec<Observer<C::State, C::Context>>,
}

impl<C: Statechart> InterpreterBuilder<C> {
    pub fn new(chart: C) -> Self {
        Self {
            chart,
            context: None,
            max_settle_steps: DEFAULT_MAX_SETTLE_STEPS,
            observers: Vec::new(),
        }
    }

    /// Start from `context` instead of the chart's initial context.
    pub fn context(mut self, context: C::Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Cap automatic transitions per event (must be at least 1).
    pub fn max_settle_steps(mut self, steps: usize) -> Self {
        self.max_settle_steps = steps;
        self
    }

    /// Register an observer before the interpreter exists.
    pub fn on_transition<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&Snapshot<C::State, C::Context>) + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the interpreter.
    /// Returns every chart violation found if the chart is unsafe to run.
    pub fn build(self) -> Result<Interpreter<C>, BuildError> {
        if let Validation::Failure(errors) = validate_chart(&self.chart, self.max_settle_steps) {
            return Err(BuildError::InvalidChart {
                violations: errors.iter().cloned().collect(),
            });
        }

        let context = self
            .context
            .unwrap_or_else(|| self.chart.initial_context());
        debug!(max_settle_steps = self.max_settle_steps, "chart validated");

        Ok(Interpreter::new(
            self.chart,
            context,
            self.max_settle_steps,
            self.observers,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::validate::tests::{two_cycle, Graph, Node};
    use crate::builder::validate::ChartViolation;
    use crate::core::Automatic;
    use std::cell::Cell;
    use std::rc::Rc;

    fn settles(state: Node) -> &'static [Automatic<Node, ()>] {
        match state {
            Node::A => &[Automatic { guard: (), target: Node::B }],
            _ => &[],
        }
    }

    #[test]
    fn builder_refuses_cyclic_chart() {
        let result = InterpreterBuilder::new(Graph(two_cycle)).build();

        match result {
            Err(BuildError::InvalidChart { violations }) => {
                assert_eq!(violations.len(), 1);
                assert!(matches!(
                    violations[0],
                    ChartViolation::AutomaticCycle { .. }
                ));
            }
            Ok(_) => panic!("Expected cyclic chart to be refused"),
        }
    }

    #[test]
    fn builder_refuses_zero_settle_limit() {
        let result = InterpreterBuilder::new(Graph(settles))
            .max_settle_steps(0)
            .build();

        assert!(matches!(result, Err(BuildError::InvalidChart { .. })));
    }

    #[test]
    fn fluent_api_builds_interpreter() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut interpreter = InterpreterBuilder::new(Graph(settles))
            .max_settle_steps(4)
            .on_transition(move |_| counter.set(counter.get() + 1))
            .build()
            .unwrap();

        assert!(interpreter.state().matches(Node::A));

        // Guards of the test graph never hold, so nothing fires.
        let snapshot = interpreter.start().unwrap();
        assert!(snapshot.matches(Node::A));
        assert_eq!(calls.get(), 1);
    }
}
