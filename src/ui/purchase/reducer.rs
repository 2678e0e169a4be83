use crate::ui::mvi::Reducer;
use crate::ui::purchase::intent::PurchaseIntent;
use crate::ui::purchase::state::PurchaseFlowState;

pub struct PurchaseReducer;

impl Reducer for PurchaseReducer {
    type State = PurchaseFlowState;
    type Intent = PurchaseIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // Every phase fully determines the next state, so the previous
        // one never survives a transition.
        match intent {
            PurchaseIntent::Submit => PurchaseFlowState {
                loading: true,
                error: None,
                success: false,
            },
            PurchaseIntent::Fulfilled => PurchaseFlowState {
                loading: false,
                error: None,
                success: true,
            },
            PurchaseIntent::Rejected { message } => PurchaseFlowState {
                loading: false,
                error: Some(message),
                success: false,
            },
            PurchaseIntent::Reset => PurchaseFlowState::default(),
        }
    }
}
