use serde::{Deserialize, Serialize};

/// One purchase submission, serialized as form-encoded `email` and
/// `amount` fields. Built from the form, sent once, discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRequest {
    pub email: String,
    pub amount: String,
}

/// Achievements summary for one user. Replaced wholesale by each fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AchievementsSummary {
    pub unlocked_achievements: Vec<String>,
    pub next_available_achievements: Vec<String>,
    pub current_badge: String,
    pub next_badge: String,
    pub remaining_to_unlock_next_badge: f64,
}

/// Wire envelope the backend wraps the summary in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub data: AchievementsSummary,
}

/// Body returned alongside a non-2xx purchase response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
