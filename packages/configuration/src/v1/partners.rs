use serde::{Deserialize, Serialize};

/// Identifiers for affiliate programs outside Travelpayouts.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Partners {
    /// GetYourGuide partner id, required for experience links.
    #[serde(default, deserialize_with = "super::optional_identifier", skip_serializing_if = "Option::is_none")]
    pub getyourguide_partner_id: Option<String>,

    #[serde(default, deserialize_with = "super::optional_identifier", skip_serializing_if = "Option::is_none")]
    pub booking_affiliate_id: Option<String>,

    #[serde(default, deserialize_with = "super::optional_identifier", skip_serializing_if = "Option::is_none")]
    pub hostelworld_affiliate_id: Option<String>,
}
