use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by the API client.
///
/// `Display` is exactly the string the screens show: the backend's
/// `message` for a declined purchase, one fixed line for any failed
/// achievements fetch. Status codes and sources ride along for the logs
/// but are never shown to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The purchase was rejected, or the request never reached the backend.
    #[error("{}", .message.as_deref().unwrap_or("Something went wrong"))]
    PurchaseDeclined {
        message: Option<String>,
        status: Option<StatusCode>,
    },

    /// The achievements fetch failed, for any reason.
    #[error("Failed to fetch achievements")]
    AchievementsUnavailable {
        status: Option<StatusCode>,
        #[source]
        source: Option<reqwest::Error>,
    },
}
