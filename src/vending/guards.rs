//! Guards deciding the automatic transitions out of `NO_COIN`.

use super::config::Denominations;
use super::context::VendingContext;
use super::event::VendingEvent;

/// Pure, total predicates over the context and the pending event.
///
/// For any nonzero coin exactly one of the two holds; with an empty slot
/// neither does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VendingGuard {
    HasValidCoin,
    HasInvalidCoin,
}

impl VendingGuard {
    pub fn evaluate(
        self,
        context: &VendingContext,
        _event: Option<&VendingEvent>,
        coins: &Denominations,
    ) -> bool {
        let coin = context.current_coin_value;
        match self {
            Self::HasValidCoin => coin != 0 && coins.contains(coin),
            Self::HasInvalidCoin => coin != 0 && !coins.contains(coin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_coin(cents: u32) -> VendingContext {
        VendingContext {
            current_coin_value: cents,
            ..VendingContext::new()
        }
    }

    #[test]
    fn empty_slot_passes_neither_guard() {
        let coins = Denominations::default();
        let context = with_coin(0);

        assert!(!VendingGuard::HasValidCoin.evaluate(&context, None, &coins));
        assert!(!VendingGuard::HasInvalidCoin.evaluate(&context, None, &coins));
    }

    #[test]
    fn guards_partition_nonzero_coins() {
        let coins = Denominations::default();
        for cents in 1..=200 {
            let context = with_coin(cents);
            let valid = VendingGuard::HasValidCoin.evaluate(&context, None, &coins);
            let invalid = VendingGuard::HasInvalidCoin.evaluate(&context, None, &coins);

            assert_ne!(valid, invalid, "coin {cents}");
            assert_eq!(valid, coins.contains(cents));
        }
    }

    #[test]
    fn pending_event_does_not_affect_outcome() {
        let coins = Denominations::default();
        let context = with_coin(25);
        let event = VendingEvent::AddCoin { value: 3 };

        assert!(VendingGuard::HasValidCoin.evaluate(&context, Some(&event), &coins));
    }
}
