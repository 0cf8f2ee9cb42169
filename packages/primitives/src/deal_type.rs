use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of travel product a deal offers.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum DealType {
    #[display("flight")]
    Flight,
    #[display("hotel")]
    Hotel,
    #[display("package")]
    Package,
    #[display("experience")]
    Experience,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown deal type: {0}")]
pub struct ParseDealTypeError(pub String);

impl FromStr for DealType {
    type Err = ParseDealTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flight" => Ok(Self::Flight),
            "hotel" => Ok(Self::Hotel),
            "package" => Ok(Self::Package),
            "experience" => Ok(Self::Experience),
            other => Err(ParseDealTypeError(other.to_owned())),
        }
    }
}
