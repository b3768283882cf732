//! Business data carried across every state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Running totals of the machine.
///
/// Actions never mutate a context in place; they return a replacement, so
/// snapshots handed to observers stay valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendingContext {
    /// Cents of the coin in the slot, 0 when empty
    pub current_coin_value: u32,
    /// Cents taken across all sales
    pub total_value: u64,
    pub num_sales: u64,
    /// Set at construction, then on every dispense
    pub last_dispensed_at: DateTime<Utc>,
}

impl VendingContext {
    /// Zeroed totals and a fresh timestamp.
    pub fn new() -> Self {
        Self {
            current_coin_value: 0,
            total_value: 0,
            num_sales: 0,
            last_dispensed_at: Utc::now(),
        }
    }

    pub fn has_coin(&self) -> bool {
        self.current_coin_value != 0
    }
}

impl Default for VendingContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_zeroed() {
        let before = Utc::now();
        let context = VendingContext::new();

        assert_eq!(context.current_coin_value, 0);
        assert_eq!(context.total_value, 0);
        assert_eq!(context.num_sales, 0);
        assert!(!context.has_coin());
        assert!(context.last_dispensed_at >= before);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let context = VendingContext {
            current_coin_value: 25,
            ..VendingContext::new()
        };

        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["currentCoinValue"], 25);
        assert_eq!(value["numSales"], 0);
        assert!(value.get("lastDispensedAt").is_some());
    }
}
