use crate::api::AchievementsSummary;
use crate::ui::mvi::FlowState;

/// Fetch-flow state. `data` survives a failed refresh so the last good
/// summary stays available.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AchievementsFlowState {
    pub data: Option<AchievementsSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FlowState for AchievementsFlowState {}
