//! Static validation of chart definitions.
//!
//! Checks run before an interpreter is built and accumulate every
//! violation with stillwater's `Validation` instead of stopping at the
//! first one.

use crate::core::{State, Statechart};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems that make a chart unsafe to run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartViolation {
    #[error("automatic transitions form a cycle: {}", .path.join(" -> "))]
    AutomaticCycle { path: Vec<String> },

    #[error("final state '{state}' declares automatic transitions")]
    AutomaticFromFinal { state: String },

    #[error("automatic transition from '{from}' targets a state missing from the chart")]
    UnknownTarget { from: String },

    #[error("initial state '{state}' is missing from the chart")]
    UnknownInitialState { state: String },

    #[error("settle limit must allow at least one automatic transition")]
    ZeroSettleLimit,
}

type Checked = Validation<(), NonEmptyVec<ChartViolation>>;

/// Validate `chart` for use with the given settle limit.
pub fn validate_chart<C: Statechart>(chart: &C, max_settle_steps: usize) -> Checked {
    let states = chart.states();
    let mut checks: Vec<Checked> = Vec::new();

    if max_settle_steps == 0 {
        checks.push(Validation::fail(ChartViolation::ZeroSettleLimit));
    }

    let initial = chart.initial_state();
    if !states.contains(&initial) {
        checks.push(Validation::fail(ChartViolation::UnknownInitialState {
            state: initial.name().to_string(),
        }));
    }

    for state in states {
        let automatic = chart.automatic(*state);
        if state.is_final() && !automatic.is_empty() {
            checks.push(Validation::fail(ChartViolation::AutomaticFromFinal {
                state: state.name().to_string(),
            }));
        }
        if automatic.iter().any(|a| !states.contains(&a.target)) {
            checks.push(Validation::fail(ChartViolation::UnknownTarget {
                from: state.name().to_string(),
            }));
        }
    }

    for path in automatic_cycles(chart) {
        checks.push(Validation::fail(ChartViolation::AutomaticCycle { path }));
    }

    Validation::all_vec(checks).map(|_| ())
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Cycles in the automatic-transition graph, one per back edge.
///
/// Guards are ignored: an edge counts even if its guard could never hold at
/// the same time as the others on the cycle.
fn automatic_cycles<C: Statechart>(chart: &C) -> Vec<Vec<String>> {
    let states = chart.states();
    let mut marks = vec![Mark::Unvisited; states.len()];
    let mut path = Vec::new();
    let mut cycles = Vec::new();

    for start in 0..states.len() {
        if marks[start] == Mark::Unvisited {
            visit(chart, start, &mut marks, &mut path, &mut cycles);
        }
    }
    cycles
}

fn visit<C: Statechart>(
    chart: &C,
    node: usize,
    marks: &mut [Mark],
    path: &mut Vec<usize>,
    cycles: &mut Vec<Vec<String>>,
) {
    let states = chart.states();
    marks[node] = Mark::OnPath;
    path.push(node);

    for automatic in chart.automatic(states[node]) {
        let Some(next) = states.iter().position(|s| *s == automatic.target) else {
            continue;
        };
        match marks[next] {
            Mark::Unvisited => visit(chart, next, marks, path, cycles),
            Mark::OnPath => {
                let from = path.iter().position(|i| *i == next).unwrap_or(0);
                let mut cycle: Vec<String> = path[from..]
                    .iter()
                    .map(|i| states[*i].name().to_string())
                    .collect();
                cycle.push(states[next].name().to_string());
                cycles.push(cycle);
            }
            Mark::Done => {}
        }
    }

    path.pop();
    marks[node] = Mark::Done;
}
