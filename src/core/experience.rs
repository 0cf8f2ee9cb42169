//! Tours and activities sold through GetYourGuide.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tripcompare_primitives::pagination::Pagination;

use super::error::Error;
use super::tracking::{ClientInfo, LinkType, NewClick};
use super::{now, validation, Backend};

pub const DEFAULT_PROVIDER: &str = "getyourguide";
pub const DEFAULT_TOP_RATED_LIMIT: u32 = 10;

/// Categories offered to visitors when browsing experiences.
pub const CATEGORIES: [&str; 8] = [
    "tours",
    "food",
    "adventure",
    "culture",
    "nightlife",
    "nature",
    "sports",
    "wellness",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub destination_id: Option<i64>,
    pub price: f64,
    pub currency: String,
    /// Free text such as `3 hours` or `Full day`.
    pub duration: Option<String>,
    pub rating: Option<f64>,
    pub review_count: i64,
    pub image_url: Option<String>,
    pub affiliate_link: Option<String>,
    pub affiliate_provider: String,
    pub category: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewExperience {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub destination_id: Option<i64>,
    pub price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewExperience {
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(super::deal::DEFAULT_CURRENCY)
    }
}

/// Criteria for experience listings. Only active experiences are listed,
/// best rated first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceFilter {
    pub destination_id: Option<i64>,
    pub category: Option<String>,
}

impl Backend {
    /// # Errors
    ///
    /// Will return `Err` if the title is empty, the price or rating is out of
    /// range, the destination does not exist or the database fails.
    pub fn create_experience(&self, experience: &NewExperience) -> Result<Experience, Error> {
        validation::length("title", &experience.title, 1, 255)?;
        validation::at_least("price", experience.price, 0.0)?;
        if let Some(rating) = experience.rating {
            validation::range("rating", rating, 0.0, 5.0)?;
        }
        if let Some(review_count) = experience.review_count {
            validation::at_least("review_count", review_count, 0)?;
        }
        if let Some(destination_id) = experience.destination_id {
            self.get_destination(destination_id)?;
        }

        Ok(self.database.insert_experience(experience, now())?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn list_experiences(&self, filter: &ExperienceFilter, pagination: &Pagination) -> Result<Vec<Experience>, Error> {
        Ok(self.database.load_experiences(filter, pagination)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn top_rated_experiences(&self, limit: u32) -> Result<Vec<Experience>, Error> {
        self.list_experiences(&ExperienceFilter::default(), &Pagination::new(0, limit))
    }

    #[must_use]
    pub fn experience_categories(&self) -> Vec<&'static str> {
        CATEGORIES.to_vec()
    }

    /// # Errors
    ///
    /// Will return `Err` if the experience does not exist or the database fails.
    pub fn get_experience(&self, id: i64) -> Result<Experience, Error> {
        self.database.get_experience(id)?.ok_or(Error::not_found("Experience"))
    }

    /// Logs a click on the experience for the analytics.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the experience does not exist or the database fails.
    pub fn track_experience_click(&self, id: i64, client: &ClientInfo) -> Result<(), Error> {
        let experience = self.get_experience(id)?;

        let provider = if experience.affiliate_provider.is_empty() {
            DEFAULT_PROVIDER.to_owned()
        } else {
            experience.affiliate_provider
        };

        self.database.insert_click(
            &NewClick {
                deal_id: None,
                experience_id: Some(experience.id),
                link_type: LinkType::Experience,
                affiliate_provider: Some(provider),
                client: client.clone(),
            },
            now(),
        )?;

        debug!(experience_id = experience.id, "experience click tracked");

        Ok(())
    }
}
