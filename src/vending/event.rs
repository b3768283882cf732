//! Events accepted by the candy machine.

use crate::core::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An input to the machine. Only `AddCoin` carries a payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VendingEvent {
    /// A coin worth `value` cents was dropped into the slot
    AddCoin { value: u32 },
    HalfTurn,
    RemoveCoin,
    Shutdown,
    Tamper,
}

/// Kind of a `VendingEvent`, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    AddCoin,
    HalfTurn,
    RemoveCoin,
    Shutdown,
    Tamper,
}

impl VendingEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AddCoin { .. } => EventKind::AddCoin,
            Self::HalfTurn => EventKind::HalfTurn,
            Self::RemoveCoin => EventKind::RemoveCoin,
            Self::Shutdown => EventKind::Shutdown,
            Self::Tamper => EventKind::Tamper,
        }
    }

    /// Coin value in cents, for `AddCoin` events.
    pub fn coin_value(&self) -> Option<u32> {
        match self {
            Self::AddCoin { value } => Some(*value),
            _ => None,
        }
    }
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddCoin => "ADD_COIN",
            Self::HalfTurn => "HALF_TURN",
            Self::RemoveCoin => "REMOVE_COIN",
            Self::Shutdown => "SHUTDOWN",
            Self::Tamper => "TAMPER",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Event for VendingEvent {
    fn kind_name(&self) -> &str {
        self.kind().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_drops_payload() {
        assert_eq!(VendingEvent::AddCoin { value: 25 }.kind(), EventKind::AddCoin);
        assert_eq!(VendingEvent::Tamper.kind(), EventKind::Tamper);
        assert_eq!(VendingEvent::HalfTurn.kind_name(), "HALF_TURN");
    }

    #[test]
    fn only_add_coin_has_a_value() {
        assert_eq!(VendingEvent::AddCoin { value: 100 }.coin_value(), Some(100));
        assert_eq!(VendingEvent::RemoveCoin.coin_value(), None);
    }

    #[test]
    fn events_use_tagged_json() {
        let json = serde_json::to_string(&VendingEvent::AddCoin { value: 10 }).unwrap();
        assert_eq!(json, r#"{"type":"ADD_COIN","value":10}"#);

        let event: VendingEvent = serde_json::from_str(r#"{"type":"HALF_TURN"}"#).unwrap();
        assert_eq!(event, VendingEvent::HalfTurn);
    }

    #[test]
    fn kind_display_matches_serde_name() {
        let json = serde_json::to_string(&EventKind::RemoveCoin).unwrap();
        assert_eq!(json, format!("\"{}\"", EventKind::RemoveCoin));
    }
}
