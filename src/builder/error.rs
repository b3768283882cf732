//! Build errors for interpreters.

use crate::builder::validate::ChartViolation;
use thiserror::Error;

/// Errors that can occur when building an interpreter.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("chart rejected: {}", describe(.violations))]
    InvalidChart { violations: Vec<ChartViolation> },
}

fn describe(violations: &[ChartViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_joins_every_violation() {
        let err = BuildError::InvalidChart {
            violations: vec![
                ChartViolation::ZeroSettleLimit,
                ChartViolation::AutomaticFromFinal {
                    state: "SHUTDOWN".to_string(),
                },
            ],
        };

        assert_eq!(
            err.to_string(),
            "chart rejected: settle limit must allow at least one automatic transition; \
             final state 'SHUTDOWN' declares automatic transitions"
        );
    }
}
