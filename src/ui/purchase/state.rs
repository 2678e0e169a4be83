use crate::ui::mvi::FlowState;

/// Submit-flow state. At most one of loading / success / error holds;
/// all-false is idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseFlowState {
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

impl FlowState for PurchaseFlowState {}

impl PurchaseFlowState {
    /// True when the flow sits in its initial state.
    pub fn is_idle(&self) -> bool {
        !self.loading && !self.success && self.error.is_none()
    }
}
