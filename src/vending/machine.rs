//! The candy machine's transition table.

use super::actions::{ActionError, VendingAction};
use super::config::{Denominations, SetupError, VendingConfig};
use super::context::VendingContext;
use super::event::{EventKind, VendingEvent};
use super::guards::VendingGuard;
use super::state::VendingState;
use crate::builder::InterpreterBuilder;
use crate::core::{Automatic, Handler, Statechart};
use crate::effects::Interpreter;

use super::actions::VendingAction::{
    ClearCoin, DispenseCandy, InvalidAction, LogSales, RecordCoin, RecordSale, ShutDown,
};
use super::state::VendingState::{InvalidCoin, NoCoin, Shutdown, SlotClosed, ValidCoin};

type VendingHandler = Handler<VendingState, VendingGuard, VendingAction>;

/// Coin-operated candy machine.
///
/// | State        | Automatic                                   | Events |
/// |--------------|---------------------------------------------|--------|
/// | NO_COIN      | valid coin → VALID_COIN, invalid → INVALID_COIN | HALF_TURN → SLOT_CLOSED; ADD_COIN records coin; SHUTDOWN → SHUTDOWN |
/// | INVALID_COIN |                                             | REMOVE_COIN → NO_COIN |
/// | VALID_COIN   |                                             | HALF_TURN sells → SLOT_CLOSED; REMOVE_COIN → NO_COIN |
/// | SLOT_CLOSED  |                                             | HALF_TURN → NO_COIN |
/// | SHUTDOWN     |                                             | every event is invalid |
///
/// `TAMPER` is invalid in every state.
#[derive(Clone, Debug, Default)]
pub struct VendingMachine {
    coins: Denominations,
}

impl VendingMachine {
    pub fn new(coins: Denominations) -> Self {
        Self { coins }
    }

    pub fn from_config(config: &VendingConfig) -> Result<Self, SetupError> {
        Ok(Self::new(config.denominations()?))
    }

    /// Validate `config` and build an interpreter for the machine it
    /// describes. The interpreter still has to be started.
    pub fn interpreter(config: &VendingConfig) -> Result<Interpreter<Self>, SetupError> {
        let machine = Self::from_config(config)?;
        Ok(InterpreterBuilder::new(machine)
            .max_settle_steps(config.max_settle_steps)
            .build()?)
    }

    pub fn denominations(&self) -> &Denominations {
        &self.coins
    }
}

impl Statechart for VendingMachine {
    type State = VendingState;
    type Event = VendingEvent;
    type Context = VendingContext;
    type Guard = VendingGuard;
    type Action = VendingAction;
    type Error = ActionError;

    fn states(&self) -> &'static [VendingState] {
        VendingState::ALL
    }

    fn initial_state(&self) -> VendingState {
        NoCoin
    }

    fn initial_context(&self) -> VendingContext {
        VendingContext::new()
    }

    fn entry_actions(&self, state: VendingState) -> &'static [VendingAction] {
        match state {
            Shutdown => &[LogSales, ShutDown],
            NoCoin | InvalidCoin | ValidCoin | SlotClosed => &[],
        }
    }

    fn automatic(&self, state: VendingState) -> &'static [Automatic<VendingState, VendingGuard>] {
        match state {
            NoCoin => &[
                Automatic {
                    guard: VendingGuard::HasValidCoin,
                    target: ValidCoin,
                },
                Automatic {
                    guard: VendingGuard::HasInvalidCoin,
                    target: InvalidCoin,
                },
            ],
            InvalidCoin | ValidCoin | SlotClosed | Shutdown => &[],
        }
    }

    fn handler(&self, state: VendingState, event: &VendingEvent) -> Option<VendingHandler> {
        let handler = match (state, event.kind()) {
            (Shutdown, _) => Handler::to(Shutdown).with_actions(&[InvalidAction]),
            (_, EventKind::Tamper) => Handler::to(state).with_actions(&[InvalidAction]),

            (NoCoin, EventKind::HalfTurn) => Handler::to(SlotClosed),
            (NoCoin, EventKind::AddCoin) => Handler::to(NoCoin).with_actions(&[RecordCoin]),
            (NoCoin, EventKind::Shutdown) => Handler::to(Shutdown),

            (InvalidCoin | ValidCoin, EventKind::RemoveCoin) => {
                Handler::to(NoCoin).with_actions(&[ClearCoin])
            }
            (ValidCoin, EventKind::HalfTurn) => {
                Handler::to(SlotClosed).with_actions(&[RecordSale, DispenseCandy, ClearCoin])
            }

            (SlotClosed, EventKind::HalfTurn) => Handler::to(NoCoin),

            _ => return None,
        };
        Some(handler)
    }

    fn check_guard(
        &self,
        guard: VendingGuard,
        context: &VendingContext,
        event: Option<&VendingEvent>,
    ) -> bool {
        guard.evaluate(context, event, &self.coins)
    }

    fn apply_action(
        &self,
        action: VendingAction,
        context: VendingContext,
        event: Option<&VendingEvent>,
    ) -> Result<VendingContext, ActionError> {
        action.apply(context, event)
    }
}
