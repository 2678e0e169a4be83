use crate::api::AchievementsSummary;
use crate::ui::mvi::Intent;

/// Actions driving the achievements fetch flow.
#[derive(Debug, Clone)]
pub enum AchievementsIntent {
    /// A fetch for the route's email went out.
    Fetch,
    /// The backend returned a summary; replaces data wholesale.
    Fulfilled { summary: AchievementsSummary },
    /// The fetch failed; previous data is kept.
    Rejected { message: String },
}

impl Intent for AchievementsIntent {}
