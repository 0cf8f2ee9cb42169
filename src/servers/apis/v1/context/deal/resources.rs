use serde::{Deserialize, Serialize};

/// Where the visitor should be sent after clicking a deal.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub affiliate_link: String,
}
