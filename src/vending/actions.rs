//! Actions run on transitions and state entry.
//!
//! Each action takes the context by value and returns its replacement.
//! `INVALID_ACTION` always fails, and `RECORD_COIN` fails outside an
//! `ADD_COIN` event; every other action is total.

use super::candy::Candy;
use super::context::VendingContext;
use super::event::{EventKind, VendingEvent};
use chrono::Utc;
use rand::Rng;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VendingAction {
    RecordCoin,
    ClearCoin,
    RecordSale,
    DispenseCandy,
    LogSales,
    ShutDown,
    InvalidAction,
}

impl VendingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecordCoin => "RECORD_COIN",
            Self::ClearCoin => "CLEAR_COIN",
            Self::RecordSale => "RECORD_SALE",
            Self::DispenseCandy => "DISPENSE_CANDY",
            Self::LogSales => "LOG_SALES",
            Self::ShutDown => "SHUT_DOWN",
            Self::InvalidAction => "INVALID_ACTION",
        }
    }
}

impl fmt::Display for VendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contract violations raised by actions.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActionError {
    /// The current state does not accept this event.
    #[error("invalid action: {event} is not accepted here")]
    InvalidAction { event: EventKind },

    #[error("{action} expects a {expected} event, got {found}")]
    UnexpectedEvent {
        action: VendingAction,
        expected: EventKind,
        found: EventKind,
    },

    #[error("{action} requires a triggering event")]
    MissingEvent { action: VendingAction },
}

impl VendingAction {
    /// Apply the action using the thread-local RNG for dispensing.
    pub fn apply(
        self,
        context: VendingContext,
        event: Option<&VendingEvent>,
    ) -> Result<VendingContext, ActionError> {
        self.apply_with(context, event, &mut rand::thread_rng())
    }

    pub fn apply_with<R: Rng + ?Sized>(
        self,
        context: VendingContext,
        event: Option<&VendingEvent>,
        rng: &mut R,
    ) -> Result<VendingContext, ActionError> {
        match self {
            Self::RecordCoin => {
                let event = event.ok_or(ActionError::MissingEvent { action: self })?;
                let value = event.coin_value().ok_or(ActionError::UnexpectedEvent {
                    action: self,
                    expected: EventKind::AddCoin,
                    found: event.kind(),
                })?;
                Ok(VendingContext {
                    current_coin_value: value,
                    ..context
                })
            }
            Self::ClearCoin => Ok(VendingContext {
                current_coin_value: 0,
                ..context
            }),
            Self::RecordSale => Ok(VendingContext {
                total_value: context
                    .total_value
                    .saturating_add(u64::from(context.current_coin_value)),
                num_sales: context.num_sales.saturating_add(1),
                ..context
            }),
            Self::DispenseCandy => {
                let candy = Candy::draw(rng);
                info!(%candy, colour = ?candy.colour, quality = ?candy.quality, "dispensing candy");
                Ok(VendingContext {
                    last_dispensed_at: Utc::now(),
                    ..context
                })
            }
            Self::LogSales => {
                info!(
                    total_value = context.total_value,
                    num_sales = context.num_sales,
                    last_dispensed_at = %context.last_dispensed_at,
                    "sales report"
                );
                Ok(context)
            }
            Self::ShutDown => {
                info!("machine shutting down");
                Ok(context)
            }
            Self::InvalidAction => {
                let event = event.ok_or(ActionError::MissingEvent { action: self })?;
                warn!(event = %event.kind(), "invalid action");
                Err(ActionError::InvalidAction {
                    event: event.kind(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(coin: u32, total: u64, sales: u64) -> VendingContext {
        VendingContext {
            current_coin_value: coin,
            total_value: total,
            num_sales: sales,
            ..VendingContext::new()
        }
    }

    #[test]
    fn record_coin_takes_event_payload() {
        let event = VendingEvent::AddCoin { value: 25 };

        let next = VendingAction::RecordCoin
            .apply(context(0, 0, 0), Some(&event))
            .unwrap();

        assert_eq!(next.current_coin_value, 25);
    }

    #[test]
    fn record_coin_rejects_other_events() {
        let err = VendingAction::RecordCoin
            .apply(context(0, 0, 0), Some(&VendingEvent::HalfTurn))
            .unwrap_err();

        assert_eq!(
            err,
            ActionError::UnexpectedEvent {
                action: VendingAction::RecordCoin,
                expected: EventKind::AddCoin,
                found: EventKind::HalfTurn,
            }
        );
        assert_eq!(
            err.to_string(),
            "RECORD_COIN expects a ADD_COIN event, got HALF_TURN"
        );
    }

    #[test]
    fn record_coin_requires_an_event() {
        let err = VendingAction::RecordCoin
            .apply(context(0, 0, 0), None)
            .unwrap_err();

        assert!(matches!(err, ActionError::MissingEvent { .. }));
    }

    #[test]
    fn sale_then_clear_uses_coin_before_zeroing() {
        let start = context(100, 50, 2);
        let mut rng = StdRng::seed_from_u64(1);

        let next = [
            VendingAction::RecordSale,
            VendingAction::DispenseCandy,
            VendingAction::ClearCoin,
        ]
        .iter()
        .try_fold(start, |ctx, action| action.apply_with(ctx, None, &mut rng))
        .unwrap();

        assert_eq!(next.total_value, 150);
        assert_eq!(next.num_sales, 3);
        assert_eq!(next.current_coin_value, 0);
    }

    #[test]
    fn record_sale_saturates_at_maximum() {
        let start = context(25, u64::MAX, u64::MAX);

        let next = VendingAction::RecordSale.apply(start, None).unwrap();

        assert_eq!(next.total_value, u64::MAX);
        assert_eq!(next.num_sales, u64::MAX);
        assert_eq!(next.current_coin_value, 25);
    }

    #[test]
    fn dispense_only_stamps_time() {
        let start = context(25, 10, 1);
        let before = Utc::now();

        let next = VendingAction::DispenseCandy
            .apply(start.clone(), None)
            .unwrap();

        assert!(next.last_dispensed_at >= before);
        assert_eq!(next.current_coin_value, start.current_coin_value);
        assert_eq!(next.total_value, start.total_value);
        assert_eq!(next.num_sales, start.num_sales);
    }

    #[test]
    fn reporting_actions_leave_context_untouched() {
        let start = context(5, 300, 4);

        for action in [VendingAction::LogSales, VendingAction::ShutDown] {
            let next = action
                .apply(start.clone(), Some(&VendingEvent::Shutdown))
                .unwrap();
            assert_eq!(next, start);
        }
    }

    #[test]
    fn invalid_action_always_fails_with_event_kind() {
        let events = [
            VendingEvent::AddCoin { value: 5 },
            VendingEvent::HalfTurn,
            VendingEvent::RemoveCoin,
            VendingEvent::Shutdown,
            VendingEvent::Tamper,
        ];

        for event in events {
            let err = VendingAction::InvalidAction
                .apply(context(0, 0, 0), Some(&event))
                .unwrap_err();
            assert_eq!(err, ActionError::InvalidAction { event: event.kind() });
        }
    }
}
