use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a price alert watches.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[display("flight")]
    Flight,
    #[display("hotel")]
    Hotel,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown alert type: {0}")]
pub struct ParseAlertTypeError(pub String);

impl FromStr for AlertType {
    type Err = ParseAlertTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(Self::Flight),
            "hotel" => Ok(Self::Hotel),
            other => Err(ParseAlertTypeError(other.to_owned())),
        }
    }
}
