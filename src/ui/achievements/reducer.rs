use crate::ui::achievements::intent::AchievementsIntent;
use crate::ui::achievements::state::AchievementsFlowState;
use crate::ui::mvi::Reducer;

pub struct AchievementsReducer;

impl Reducer for AchievementsReducer {
    type State = AchievementsFlowState;
    type Intent = AchievementsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AchievementsIntent::Fetch => AchievementsFlowState {
                data: state.data,
                loading: true,
                error: None,
            },
            AchievementsIntent::Fulfilled { summary } => AchievementsFlowState {
                data: Some(summary),
                loading: false,
                error: None,
            },
            AchievementsIntent::Rejected { message } => AchievementsFlowState {
                data: state.data,
                loading: false,
                error: Some(message),
            },
        }
    }
}
