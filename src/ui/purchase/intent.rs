use crate::ui::mvi::Intent;

/// Actions driving the purchase submit flow.
#[derive(Debug, Clone)]
pub enum PurchaseIntent {
    /// A validated form went out; the request is in flight.
    Submit,
    /// The backend accepted the purchase.
    Fulfilled,
    /// The backend declined, or the request never made it.
    Rejected { message: String },
    /// Return to idle, e.g. when navigating away after success.
    Reset,
}

impl Intent for PurchaseIntent {}
