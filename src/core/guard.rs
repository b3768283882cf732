//! Guarded automatic transitions.
//!
//! Automatic ("always") transitions carry no triggering event. They are
//! re-evaluated after a state is entered and after every accepted event;
//! the first one whose guard holds fires.

use serde::{Deserialize, Serialize};

/// Guard-only transition to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automatic<S, G> {
    pub guard: G,
    pub target: S,
}

impl<S, G> Automatic<S, G> {
    pub const fn new(guard: G, target: S) -> Self {
        Self { guard, target }
    }
}

/// Find the first automatic transition whose guard holds.
///
/// Evaluation stops at the first match, so guards after it are never
/// consulted. Pure as long as `check` is.
///
/// # Example
///
/// ```rust
/// use vendchart::core::{first_enabled, Automatic};
///
/// let table = [Automatic::new(10u32, "big"), Automatic::new(1u32, "small")];
///
/// let fired = first_enabled(&table, |threshold| 5 >= *threshold);
/// assert_eq!(fired.map(|a| a.target), Some("small"));
///
/// let none = first_enabled(&table, |threshold| 0 >= *threshold);
/// assert!(none.is_none());
/// ```
pub fn first_enabled<'a, S, G, F>(
    transitions: &'a [Automatic<S, G>],
    mut check: F,
) -> Option<&'a Automatic<S, G>>
where
    F: FnMut(&G) -> bool,
{
    transitions.iter().find(|t| check(&t.guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Level {
        Low,
        High,
    }

    const TABLE: [Automatic<Level, u32>; 2] =
        [Automatic::new(100, Level::High), Automatic::new(1, Level::Low)];

    #[test]
    fn first_matching_guard_wins() {
        let fired = first_enabled(&TABLE, |min| 150 >= *min);
        assert_eq!(fired.map(|a| a.target), Some(Level::High));
    }

    #[test]
    fn later_guards_are_consulted_in_order() {
        let fired = first_enabled(&TABLE, |min| 50 >= *min);
        assert_eq!(fired.map(|a| a.target), Some(Level::Low));
    }

    #[test]
    fn no_transition_when_every_guard_fails() {
        assert!(first_enabled(&TABLE, |_| false).is_none());
    }

    #[test]
    fn evaluation_stops_at_first_match() {
        let mut consulted = Vec::new();
        first_enabled(&TABLE, |min| {
            consulted.push(*min);
            true
        });
        assert_eq!(consulted, vec![100]);
    }

    #[test]
    fn empty_table_never_fires() {
        let empty: [Automatic<Level, u32>; 0] = [];
        assert!(first_enabled(&empty, |_| true).is_none());
    }
}
