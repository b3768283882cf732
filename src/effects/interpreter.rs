//! Interpreter that runs a statechart one event at a time.

use crate::core::{first_enabled, Event, State, StateHistory, StateTransition, Statechart};
use crate::effects::error::InterpreterError;
use crate::effects::snapshot::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Lifecycle of an interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    NotStarted,
    Running,
    Stopped,
    /// Automatic transitions did not settle; the chart is unusable.
    Failed,
}

/// Callback invoked with every settled snapshot.
pub type Observer<S, C> = Box<dyn FnMut(&Snapshot<S, C>)>;

type Outcome<C> = Result<
    Snapshot<<C as Statechart>::State, <C as Statechart>::Context>,
    InterpreterError<<C as Statechart>::Error>,
>;

/// Runtime holding the current state and context of a chart.
///
/// Each `send` is processed to quiescence: handler actions, entry actions of
/// the new state, then automatic transitions until none fires. All of it is
/// applied to a working copy of the context and committed only when every
/// action succeeded, so a rejected event leaves the interpreter untouched.
pub struct Interpreter<C: Statechart> {
    id: Uuid,
    chart: C,
    max_settle_steps: usize,
    status: Status,
    state: Snapshot<C::State, C::Context>,
    history: StateHistory<C::State>,
    observers: Vec<Observer<C::State, C::Context>>,
}

impl<C: Statechart> Interpreter<C> {
    pub(crate) fn new(
        chart: C,
        context: C::Context,
        max_settle_steps: usize,
        observers: Vec<Observer<C::State, C::Context>>,
    ) -> Self {
        let initial = chart.initial_state();
        Self {
            id: Uuid::new_v4(),
            chart,
            max_settle_steps,
            status: Status::NotStarted,
            state: Snapshot {
                value: initial,
                context,
                event: None,
                changed: false,
            },
            history: StateHistory::new(),
            observers,
        }
    }

    /// Unique id of this interpreter, attached to every log line.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Last settled snapshot.
    pub fn state(&self) -> &Snapshot<C::State, C::Context> {
        &self.state
    }

    pub fn context(&self) -> &C::Context {
        &self.state.context
    }

    /// Committed state changes, in order.
    pub fn history(&self) -> &StateHistory<C::State> {
        &self.history
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    pub fn is_final(&self) -> bool {
        self.state.value.is_final()
    }

    /// Register an observer called after every settled snapshot.
    pub fn on_transition<F>(&mut self, observer: F) -> &mut Self
    where
        F: FnMut(&Snapshot<C::State, C::Context>) + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Enter the initial state and settle its automatic transitions.
    pub fn start(&mut self) -> Outcome<C> {
        if self.status != Status::NotStarted {
            return Err(InterpreterError::AlreadyStarted);
        }

        let initial = self.state.value;
        info!(machine = %self.id, state = initial.name(), "starting interpreter");

        let mut transitions = Vec::new();
        let entry = self.chart.entry_actions(initial);
        let context = self.run_actions(initial, entry, self.state.context.clone(), None)?;
        let (state, context) = self
            .settle(initial, context, None, &mut transitions)
            .map_err(|e| self.halt_on_settle_limit(e))?;

        self.status = Status::Running;
        Ok(self.commit(state, context, None, transitions))
    }

    /// Feed one event and return the settled snapshot.
    ///
    /// Events without a handler in the current state, or whose handler
    /// guard fails, are ignored: state and context stay as they are, and the
    /// returned snapshot (also handed to observers) has `changed: false`.
    ///
    /// Exceeding the settle limit is fatal: the interpreter moves to
    /// `Status::Failed` and refuses further events.
    pub fn send(&mut self, event: C::Event) -> Outcome<C> {
        if self.status != Status::Running {
            return Err(InterpreterError::NotRunning {
                status: self.status,
            });
        }

        let source = self.state.value;
        let kind = event.kind_name().to_string();

        let Some(handler) = self.chart.handler(source, &event) else {
            debug!(machine = %self.id, state = source.name(), event = %kind, "event not handled in current state");
            return Ok(self.ignore(kind));
        };

        if let Some(guard) = handler.guard {
            if !self
                .chart
                .check_guard(guard, &self.state.context, Some(&event))
            {
                debug!(machine = %self.id, state = source.name(), event = %kind, ?guard, "guard blocked event");
                return Ok(self.ignore(kind));
            }
        }

        let leaving = handler.target != source;
        let mut context = self.state.context.clone();
        if leaving {
            let exit = self.chart.exit_actions(source);
            context = self.run_actions(source, exit, context, Some(&event))?;
        }

        let mut transitions = Vec::new();
        context = self.run_actions(source, handler.actions, context, Some(&event))?;

        let mut state = source;
        if leaving {
            transitions.push(StateTransition::now(source, handler.target, Some(&kind)));
            let entry = self.chart.entry_actions(handler.target);
            context = self.run_actions(handler.target, entry, context, Some(&event))?;
            state = handler.target;
        }

        let (state, context) = self
            .settle(state, context, Some(&event), &mut transitions)
            .map_err(|e| self.halt_on_settle_limit(e))?;
        Ok(self.commit(state, context, Some(kind), transitions))
    }

    /// Stop accepting events. The context is kept as it is.
    pub fn stop(&mut self) {
        if matches!(self.status, Status::NotStarted | Status::Running) {
            info!(machine = %self.id, state = self.state.value.name(), "stopping interpreter");
            self.status = Status::Stopped;
        }
    }

    fn run_actions(
        &self,
        state: C::State,
        actions: &[C::Action],
        context: C::Context,
        event: Option<&C::Event>,
    ) -> Result<C::Context, InterpreterError<C::Error>> {
        actions.iter().try_fold(context, |context, action| {
            debug!(machine = %self.id, state = state.name(), ?action, "applying action");
            self.chart
                .apply_action(*action, context, event)
                .map_err(|source| {
                    let event = event.map_or("start", |e| e.kind_name()).to_string();
                    warn!(machine = %self.id, state = state.name(), %event, ?action, error = %source, "action rejected event");
                    InterpreterError::Action {
                        state: state.name().to_string(),
                        event,
                        source,
                    }
                })
        })
    }

    /// Fire automatic transitions until none applies.
    fn settle(
        &self,
        mut state: C::State,
        mut context: C::Context,
        event: Option<&C::Event>,
        transitions: &mut Vec<StateTransition<C::State>>,
    ) -> Result<(C::State, C::Context), InterpreterError<C::Error>> {
        let mut steps = 0;
        loop {
            let next = first_enabled(self.chart.automatic(state), |guard| {
                self.chart.check_guard(*guard, &context, event)
            });
            let Some(automatic) = next else {
                return Ok((state, context));
            };

            if steps == self.max_settle_steps {
                warn!(machine = %self.id, state = state.name(), limit = self.max_settle_steps, "automatic transitions did not settle");
                return Err(InterpreterError::SettleLimitExceeded {
                    state: state.name().to_string(),
                    limit: self.max_settle_steps,
                });
            }
            steps += 1;

            let target = automatic.target;
            debug!(machine = %self.id, from = state.name(), to = target.name(), guard = ?automatic.guard, "automatic transition");
            transitions.push(StateTransition::now(
                state,
                target,
                event.map(|e| e.kind_name()),
            ));
            context = self.run_actions(state, self.chart.exit_actions(state), context, event)?;
            context = self.run_actions(target, self.chart.entry_actions(target), context, event)?;
            state = target;
        }
    }

    fn commit(
        &mut self,
        state: C::State,
        context: C::Context,
        event: Option<String>,
        transitions: Vec<StateTransition<C::State>>,
    ) -> Snapshot<C::State, C::Context> {
        let changed = !transitions.is_empty();
        self.history = self.history.extend(transitions);
        self.state = Snapshot {
            value: state,
            context,
            event,
            changed,
        };

        info!(
            machine = %self.id,
            state = state.name(),
            event = self.state.event.as_deref().unwrap_or("start"),
            changed,
            "settled"
        );
        if state.is_final() {
            info!(machine = %self.id, state = state.name(), "reached final state");
        }

        for observer in self.observers.iter_mut() {
            observer(&self.state);
        }
        self.state.clone()
    }

    fn halt_on_settle_limit(
        &mut self,
        err: InterpreterError<C::Error>,
    ) -> InterpreterError<C::Error> {
        if matches!(err, InterpreterError::SettleLimitExceeded { .. }) {
            error!(machine = %self.id, state = self.state.value.name(), error = %err, "halting interpreter");
            self.status = Status::Failed;
        }
        err
    }

    /// Settled snapshot for an ignored event. Nothing is committed.
    fn ignore(&mut self, kind: String) -> Snapshot<C::State, C::Context> {
        let snapshot = Snapshot {
            event: Some(kind),
            changed: false,
            ..self.state.clone()
        };
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
        snapshot
    }
}
