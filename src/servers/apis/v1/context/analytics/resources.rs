use serde::{Deserialize, Serialize};

use crate::core::price_alert::PriceAlert;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PriceAlerts {
    pub email: String,
    pub alerts: Vec<PriceAlert>,
}

/// Outcome of a price alert deletion. Unknown alerts are not an error.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AlertDeletion {
    pub success: bool,
    pub message: String,
}

impl AlertDeletion {
    #[must_use]
    pub fn new(deleted: bool) -> Self {
        Self {
            success: deleted,
            message: if deleted { "Alert deleted" } else { "Alert not found" }.to_owned(),
        }
    }
}
