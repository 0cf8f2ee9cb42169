use serde::{Deserialize, Serialize};

/// Number of subscribers.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SubscriberCount {
    pub total: u64,
    pub active_only: bool,
}
