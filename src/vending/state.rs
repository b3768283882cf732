//! States of the candy machine.

crate::state_enum! {
    /// Where the machine is in its coin-handling cycle.
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum VendingState {
        NoCoin => "NO_COIN",
        InvalidCoin => "INVALID_COIN",
        ValidCoin => "VALID_COIN",
        SlotClosed => "SLOT_CLOSED",
        Shutdown => "SHUTDOWN",
    }
    final: [Shutdown]
}
