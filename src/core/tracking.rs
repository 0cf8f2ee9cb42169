//! Search and click logs used by the analytics.
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Error;
use super::{now, Backend};

/// Request metadata stored with every search and click.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    /// Value of the `session_id` cookie.
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[display("flight")]
    Flight,
    #[display("hotel")]
    Hotel,
    #[display("experience")]
    Experience,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    #[display("deal")]
    Deal,
    #[display("search")]
    Search,
    #[display("experience")]
    Experience,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSearchLog {
    pub search_type: SearchType,
    pub origin: Option<String>,
    pub destination: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub travelers: i64,
    pub client: ClientInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub deal_id: Option<i64>,
    pub experience_id: Option<i64>,
    pub link_type: LinkType,
    pub affiliate_provider: Option<String>,
    pub client: ClientInfo,
}

/// Search counts of a destination.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationSearches {
    pub name: String,
    pub searches: u64,
}

/// Midnight UTC of a travel date, as stored in the search logs.
#[must_use]
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

impl Backend {
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn log_search(&self, search: &NewSearchLog) -> Result<(), Error> {
        self.database.insert_search_log(search, now())?;

        debug!(search_type = %search.search_type, destination = search.destination, "search logged");

        Ok(())
    }

    /// Clicks logged in the last `days` days.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn count_clicks(&self, days: u32) -> Result<u64, Error> {
        Ok(self.database.count_clicks_since(now() - Duration::days(i64::from(days)))?)
    }

    /// Clicks logged in the last `days` days per affiliate provider.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn clicks_by_provider(&self, days: u32) -> Result<BTreeMap<String, u64>, Error> {
        let since = now() - Duration::days(i64::from(days));

        Ok(self.database.count_clicks_by_provider_since(since)?.into_iter().collect())
    }

    /// Destinations ranked by the number of searches that named them.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn top_destinations(&self, limit: u32) -> Result<Vec<DestinationSearches>, Error> {
        Ok(self.database.load_top_destinations(limit)?)
    }
}
