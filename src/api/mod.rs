//! HTTP client for the purchase rewards backend.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{AchievementsSummary, PurchaseRequest};
