//! Price alerts requested by visitors.
//!
//! Alerts are only stored. Nothing checks prices or sends notifications.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tripcompare_primitives::alert_type::AlertType;

use super::error::Error;
use super::{now, validation, Backend};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceAlert {
    pub id: i64,
    pub email: String,
    pub alert_type: AlertType,
    pub origin: Option<String>,
    pub destination: String,
    pub target_price: Option<f64>,
    pub current_lowest_price: Option<f64>,
    pub is_active: bool,
    pub last_notified: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewPriceAlert {
    pub email: String,
    pub alert_type: AlertType,
    #[serde(default)]
    pub origin: Option<String>,
    pub destination: String,
    #[serde(default)]
    pub target_price: Option<f64>,
}

impl Backend {
    /// # Errors
    ///
    /// Will return `Err` if the e-mail is malformed, the destination is empty
    /// or the database fails.
    pub fn create_price_alert(&self, alert: &NewPriceAlert) -> Result<PriceAlert, Error> {
        validation::email("email", &alert.email)?;
        validation::length("destination", &alert.destination, 1, 255)?;
        if let Some(target_price) = alert.target_price {
            validation::at_least("target_price", target_price, 0.0)?;
        }

        Ok(self.database.insert_price_alert(alert, now())?)
    }

    /// Active alerts of an e-mail.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn price_alerts(&self, email: &str) -> Result<Vec<PriceAlert>, Error> {
        Ok(self.database.load_price_alerts_by_email(email)?)
    }

    /// Deactivates the alert when both the id and the e-mail match.
    ///
    /// Returns whether an alert was found.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn delete_price_alert(&self, id: i64, email: &str) -> Result<bool, Error> {
        Ok(self.database.deactivate_price_alert(id, email)?)
    }
}
