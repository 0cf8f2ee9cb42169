//! The persistence module.
//!
//! Persistence is currently implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. Tables are created when
//! the driver is built if they do not exist yet.
//!
//! Timestamps are stored as Unix seconds. Free-form JSON values (subscriber
//! preferences and destination tags) are stored as text.
//!
//! The persistent objects are:
//!
//! - [Subscribers](#subscribers)
//! - [Destinations](#destinations)
//! - [Deals](#deals)
//! - [Experiences](#experiences)
//! - [Search logs](#search-logs)
//! - [Click tracking](#click-tracking)
//! - [Price alerts](#price-alerts)
//!
//! # Subscribers
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id` | 1 | Autoincrement id
//! `email` | `jane@example.com` | Unique e-mail address
//! `name` | `Jane` | Optional name
//! `is_active` | 1 | Cleared when the subscriber unsubscribes
//! `source` | `website` | Where the sign-up came from
//! `preferences` | `{"flights":true,"hotels":true,"deals":true}` | JSON object
//! `created_at` | 1767225600 | Sign-up time
//! `updated_at` | 1767312000 | Last change, if any
//!
//! # Destinations
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id` | 1 | Autoincrement id
//! `name` | `Barcelona` | Name matched against the search logs
//! `country` | `Spain` |
//! `city_code` | `BCN` | IATA code
//! `is_featured` | 1 | Shown on the home page
//! `tags` | `["beach","city"]` | JSON array
//!
//! # Deals
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id` | 1 | Autoincrement id
//! `deal_type` | `flight` | `flight`, `hotel`, `package` or `experience`
//! `destination_id` | 1 | Optional destination
//! `original_price` | 189.0 |
//! `deal_price` | 119.0 |
//! `discount_percentage` | 37 | Derived from both prices
//! `click_count` | 12 | Outbound clicks
//!
//! # Experiences
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id` | 1 | Autoincrement id
//! `rating` | 4.8 | Optional, from 0 to 5
//! `affiliate_provider` | `getyourguide` |
//! `category` | `food` | One of the experience categories
//!
//! # Search logs
//!
//! One row per flight, hotel or experience search with the visitor's IP
//! address, user agent and `session_id` cookie.
//!
//! # Click tracking
//!
//! One row per outbound click on a deal or an experience.
//!
//! # Price alerts
//!
//! Field | Sample data | Description
//! ---|---|---
//! `id` | 1 | Autoincrement id
//! `email` | `jane@example.com` | Owner of the alert
//! `alert_type` | `flight` | `flight` or `hotel`
//! `is_active` | 1 | Cleared when the alert is deleted
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use tripcompare_primitives::pagination::Pagination;

use self::error::Error;
use crate::core::deal::{Deal, DealFilter, NewDeal};
use crate::core::destination::{Destination, NewDestination};
use crate::core::experience::{Experience, ExperienceFilter, NewExperience};
use crate::core::price_alert::{NewPriceAlert, PriceAlert};
use crate::core::subscriber::{NewSubscriber, Subscriber};
use crate::core::tracking::{DestinationSearches, NewClick, NewSearchLog};

struct Builder<T>
where
    T: Database,
{
    phantom: PhantomData<T>,
}

impl<T> Builder<T>
where
    T: Database + 'static,
{
    /// .
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    pub(self) fn build(db_path: &str) -> Result<Box<dyn Database>, Error> {
        Ok(Box::new(T::new(db_path)?))
    }
}

/// The persistence trait. It contains all the methods to interact with the database.
pub trait Database: Sync + Send {
    /// It instantiates a new database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create a database.
    fn new(db_path: &str) -> Result<Self, Error>
    where
        Self: std::marker::Sized;

    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It drops the database tables.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to drop tables.
    fn drop_database_tables(&self) -> Result<(), Error>;

    // Subscribers

    /// It inserts an active subscriber with the default source and
    /// preferences when they are not given.
    ///
    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save, for example when the e-mail is
    /// already registered.
    fn insert_subscriber(&self, subscriber: &NewSubscriber, created_at: DateTime<Utc>) -> Result<Subscriber, Error>;

    /// It returns the subscriber with the e-mail, active or not.
    ///
    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_subscriber_by_email(&self, email: &str) -> Result<Option<Subscriber>, Error>;

    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_subscribers(&self, pagination: &Pagination, active_only: bool) -> Result<Vec<Subscriber>, Error>;

    /// It stores the name, the active flag, the preferences and the update
    /// time of an existing subscriber.
    ///
    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn save_subscriber(&self, subscriber: &Subscriber) -> Result<(), Error>;

    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn count_subscribers(&self, active_only: bool) -> Result<u64, Error>;

    /// It counts the subscribers created at or after `since`.
    ///
    /// # Context: Subscribers
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn count_subscribers_since(&self, since: DateTime<Utc>) -> Result<u64, Error>;

    // Destinations

    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_destination(&self, destination: &NewDestination, created_at: DateTime<Utc>) -> Result<Destination, Error>;

    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_destination(&self, id: i64) -> Result<Option<Destination>, Error>;

    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_destination_by_name(&self, name: &str) -> Result<Option<Destination>, Error>;

    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_destinations(&self, pagination: &Pagination, featured_only: bool) -> Result<Vec<Destination>, Error>;

    /// It returns the destinations whose name, country or city code contains
    /// `query`, ignoring case.
    ///
    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn search_destinations(&self, query: &str, limit: u32) -> Result<Vec<Destination>, Error>;

    /// It stores every field of an existing destination.
    ///
    /// # Context: Destinations
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn save_destination(&self, destination: &Destination) -> Result<(), Error>;

    // Deals

    /// It inserts an active deal. The discount percentage is derived from the
    /// prices.
    ///
    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_deal(&self, deal: &NewDeal, created_at: DateTime<Utc>) -> Result<Deal, Error>;

    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_deal(&self, id: i64) -> Result<Option<Deal>, Error>;

    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_deal_by_title(&self, title: &str) -> Result<Option<Deal>, Error>;

    /// It returns the deals matching the filter, newest first.
    ///
    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_deals(&self, filter: &DealFilter, pagination: &Pagination) -> Result<Vec<Deal>, Error>;

    /// It returns the active deals of a destination.
    ///
    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_deals_by_destination(&self, destination_id: i64, limit: u32) -> Result<Vec<Deal>, Error>;

    /// It stores the editable fields of an existing deal.
    ///
    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn save_deal(&self, deal: &Deal) -> Result<(), Error>;

    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn increment_deal_clicks(&self, id: i64) -> Result<(), Error>;

    /// # Context: Deals
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn count_deals(&self, active_only: bool) -> Result<u64, Error>;

    // Experiences

    /// # Context: Experiences
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_experience(&self, experience: &NewExperience, created_at: DateTime<Utc>) -> Result<Experience, Error>;

    /// # Context: Experiences
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_experience(&self, id: i64) -> Result<Option<Experience>, Error>;

    /// # Context: Experiences
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_experience_by_title(&self, title: &str) -> Result<Option<Experience>, Error>;

    /// It returns the active experiences matching the filter, best rated
    /// first.
    ///
    /// # Context: Experiences
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_experiences(&self, filter: &ExperienceFilter, pagination: &Pagination) -> Result<Vec<Experience>, Error>;

    // Search logs

    /// # Context: Search logs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_search_log(&self, search: &NewSearchLog, created_at: DateTime<Utc>) -> Result<(), Error>;

    /// It ranks the destinations by the number of searches naming them.
    /// Destinations never searched are ranked with zero searches.
    ///
    /// # Context: Search logs
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_top_destinations(&self, limit: u32) -> Result<Vec<DestinationSearches>, Error>;

    // Click tracking

    /// # Context: Click tracking
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_click(&self, click: &NewClick, created_at: DateTime<Utc>) -> Result<(), Error>;

    /// # Context: Click tracking
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn count_clicks_since(&self, since: DateTime<Utc>) -> Result<u64, Error>;

    /// It counts the clicks per affiliate provider. Clicks without provider
    /// are counted as `unknown`.
    ///
    /// # Context: Click tracking
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn count_clicks_by_provider_since(&self, since: DateTime<Utc>) -> Result<Vec<(String, u64)>, Error>;

    // Price alerts

    /// # Context: Price alerts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_price_alert(&self, alert: &NewPriceAlert, created_at: DateTime<Utc>) -> Result<PriceAlert, Error>;

    /// It returns the active alerts of an e-mail.
    ///
    /// # Context: Price alerts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_price_alerts_by_email(&self, email: &str) -> Result<Vec<PriceAlert>, Error>;

    /// It deactivates the alert when it belongs to the e-mail. It returns
    /// whether an alert was deactivated.
    ///
    /// # Context: Price alerts
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn deactivate_price_alert(&self, id: i64, email: &str) -> Result<bool, Error>;
}

/// Date and time of a stored Unix timestamp.
pub(crate) fn from_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Pattern matching values that contain `query`.
pub(crate) fn contains_pattern(query: &str) -> String {
    format!("%{}%", query.to_lowercase())
}
