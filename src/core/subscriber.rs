//! Newsletter subscribers.
//!
//! Subscriptions are never deleted. Unsubscribing clears the `is_active`
//! flag and subscribing again with the same e-mail reactivates the record.
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;
use tripcompare_primitives::pagination::Pagination;

use super::error::Error;
use super::{now, validation, Backend};

/// Free-form e-mail preferences, for example `{"flights": true}`.
pub type Preferences = Map<String, Value>;

pub const DEFAULT_SOURCE: &str = "website";

/// Window used for the "recent sign-ups" figures.
pub const RECENT_SIGNUPS_DAYS: i64 = 7;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub source: String,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data needed to register a subscriber.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NewSubscriber {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

/// Changes to an existing subscriber. Missing fields are left untouched.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SubscriberUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
}

#[must_use]
pub fn default_preferences() -> Preferences {
    let mut preferences = Map::new();
    preferences.insert("flights".to_owned(), Value::Bool(true));
    preferences.insert("hotels".to_owned(), Value::Bool(true));
    preferences.insert("deals".to_owned(), Value::Bool(true));
    preferences
}

impl NewSubscriber {
    #[must_use]
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    #[must_use]
    pub fn preferences(&self) -> Preferences {
        self.preferences.clone().unwrap_or_else(default_preferences)
    }
}

impl Subscriber {
    fn apply(&mut self, update: SubscriberUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(preferences) = update.preferences {
            self.preferences = preferences;
        }
        self.updated_at = Some(now);
    }
}

impl Backend {
    /// Subscribes an e-mail to the newsletter.
    ///
    /// An inactive subscription for the same e-mail is reactivated and
    /// returned as it was stored.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the e-mail is malformed, already has an active
    /// subscription or the database fails.
    pub fn subscribe(&self, new_subscriber: &NewSubscriber) -> Result<Subscriber, Error> {
        validation::email("email", &new_subscriber.email)?;

        if let Some(mut existing) = self.database.get_subscriber_by_email(&new_subscriber.email)? {
            if existing.is_active {
                return Err(Error::AlreadySubscribed {
                    email: existing.email,
                });
            }

            existing.is_active = true;
            existing.updated_at = Some(now());
            self.database.save_subscriber(&existing)?;

            info!(email = %existing.email, "subscription reactivated");

            return Ok(existing);
        }

        let subscriber = self.database.insert_subscriber(new_subscriber, now())?;

        info!(email = %subscriber.email, source = %subscriber.source, "new subscriber");

        Ok(subscriber)
    }

    /// # Errors
    ///
    /// Will return `Err` if the subscriber does not exist or the database fails.
    pub fn get_subscriber(&self, email: &str) -> Result<Subscriber, Error> {
        self.database
            .get_subscriber_by_email(email)?
            .ok_or(Error::not_found("Subscriber"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn list_subscribers(&self, pagination: &Pagination, active_only: bool) -> Result<Vec<Subscriber>, Error> {
        Ok(self.database.load_subscribers(pagination, active_only)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the subscriber does not exist or the database fails.
    pub fn update_subscriber(&self, email: &str, update: SubscriberUpdate) -> Result<Subscriber, Error> {
        let mut subscriber = self.get_subscriber(email)?;

        subscriber.apply(update, now());

        self.database.save_subscriber(&subscriber)?;

        Ok(subscriber)
    }

    /// Soft-deletes a subscription.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the subscriber does not exist or the database fails.
    pub fn unsubscribe(&self, email: &str) -> Result<(), Error> {
        self.update_subscriber(
            email,
            SubscriberUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )?;

        info!(email, "unsubscribed");

        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn count_subscribers(&self, active_only: bool) -> Result<u64, Error> {
        Ok(self.database.count_subscribers(active_only)?)
    }

    /// Subscribers created in the last [`RECENT_SIGNUPS_DAYS`] days.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn count_recent_signups(&self) -> Result<u64, Error> {
        let since = now() - Duration::days(RECENT_SIGNUPS_DAYS);
        Ok(self.database.count_subscribers_since(since)?)
    }
}
