//! Travel deals and their click tracking.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tripcompare_primitives::deal_type::DealType;
use tripcompare_primitives::pagination::Pagination;

use super::error::Error;
use super::tracking::{ClientInfo, LinkType, NewClick};
use super::{now, validation, Backend};

pub const DEFAULT_FEATURED_LIMIT: u32 = 6;
pub const DEFAULT_SHORTCUT_LIMIT: u32 = 10;

/// Number of newest active deals ranked by the hot deals listing.
pub const HOT_DEALS_POOL: u32 = 50;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// Provider recorded for clicks on deals without one.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Link returned by the redirect when a deal has no affiliate link.
pub const NO_LINK: &str = "#";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub deal_type: DealType,
    pub destination_id: Option<i64>,
    pub origin_city: Option<String>,
    pub original_price: f64,
    pub deal_price: f64,
    pub discount_percentage: i64,
    pub currency: String,
    pub affiliate_link: Option<String>,
    pub affiliate_provider: Option<String>,
    pub image_url: Option<String>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    /// Human readable travel window, for example `Apr 15-22`.
    pub travel_dates: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub click_count: i64,
    pub booking_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewDeal {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub deal_type: DealType,
    #[serde(default)]
    pub destination_id: Option<i64>,
    #[serde(default)]
    pub origin_city: Option<String>,
    pub original_price: f64,
    pub deal_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
    #[serde(default)]
    pub affiliate_provider: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub travel_dates: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DealUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deal_price: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
}

/// Criteria for deal listings. Results are always newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealFilter {
    pub deal_type: Option<DealType>,
    pub featured_only: bool,
    pub active_only: bool,
}

impl Default for DealFilter {
    fn default() -> Self {
        Self {
            deal_type: None,
            featured_only: false,
            active_only: true,
        }
    }
}

impl DealFilter {
    #[must_use]
    pub fn of_type(deal_type: DealType) -> Self {
        Self {
            deal_type: Some(deal_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn featured() -> Self {
        Self {
            featured_only: true,
            ..Default::default()
        }
    }
}

/// Whole-number percentage saved by the deal price, truncated toward zero.
///
/// Non-positive original prices yield `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn discount_percentage(original_price: f64, deal_price: f64) -> i64 {
    if original_price <= 0.0 {
        return 0;
    }

    (((original_price - deal_price) / original_price) * 100.0).trunc() as i64
}

impl NewDeal {
    #[must_use]
    pub fn currency(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    #[must_use]
    pub fn discount_percentage(&self) -> i64 {
        discount_percentage(self.original_price, self.deal_price)
    }
}

impl Deal {
    fn apply(&mut self, update: DealUpdate, at: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if let Some(deal_price) = update.deal_price {
            self.deal_price = deal_price;
            self.discount_percentage = discount_percentage(self.original_price, deal_price);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        if update.affiliate_link.is_some() {
            self.affiliate_link = update.affiliate_link;
        }
        self.updated_at = Some(at);
    }

    fn click_provider(&self) -> String {
        self.affiliate_provider
            .clone()
            .unwrap_or_else(|| UNKNOWN_PROVIDER.to_owned())
    }
}

impl Backend {
    /// # Errors
    ///
    /// Will return `Err` if the title is empty, a price is negative, the
    /// destination does not exist or the database fails.
    pub fn create_deal(&self, deal: &NewDeal) -> Result<Deal, Error> {
        validation::length("title", &deal.title, 1, 255)?;
        validation::at_least("original_price", deal.original_price, 0.0)?;
        validation::at_least("deal_price", deal.deal_price, 0.0)?;

        if let Some(destination_id) = deal.destination_id {
            self.get_destination(destination_id)?;
        }

        Ok(self.database.insert_deal(deal, now())?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn list_deals(&self, filter: &DealFilter, pagination: &Pagination) -> Result<Vec<Deal>, Error> {
        Ok(self.database.load_deals(filter, pagination)?)
    }

    /// Active deals with the biggest discounts among the newest
    /// [`HOT_DEALS_POOL`] deals.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn hot_deals(&self, limit: u32) -> Result<Vec<Deal>, Error> {
        let mut deals = self.list_deals(&DealFilter::default(), &Pagination::new(0, HOT_DEALS_POOL))?;

        deals.sort_by(|a, b| b.discount_percentage.cmp(&a.discount_percentage));
        deals.truncate(limit as usize);

        Ok(deals)
    }

    /// # Errors
    ///
    /// Will return `Err` if the deal does not exist or the database fails.
    pub fn get_deal(&self, id: i64) -> Result<Deal, Error> {
        self.database.get_deal(id)?.ok_or(Error::not_found("Deal"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the deal does not exist, the new price is
    /// negative or the database fails.
    pub fn update_deal(&self, id: i64, update: DealUpdate) -> Result<Deal, Error> {
        if let Some(deal_price) = update.deal_price {
            validation::at_least("deal_price", deal_price, 0.0)?;
        }

        let mut deal = self.get_deal(id)?;

        deal.apply(update, now());

        self.database.save_deal(&deal)?;

        Ok(deal)
    }

    /// Counts a click on the deal and logs it for the analytics.
    ///
    /// Returns the deal as it was before the click.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the deal does not exist or the database fails.
    pub fn track_deal_click(&self, id: i64, client: &ClientInfo) -> Result<Deal, Error> {
        let deal = self.get_deal(id)?;

        self.database.increment_deal_clicks(deal.id)?;
        self.database.insert_click(
            &NewClick {
                deal_id: Some(deal.id),
                experience_id: None,
                link_type: LinkType::Deal,
                affiliate_provider: Some(deal.click_provider()),
                client: client.clone(),
            },
            now(),
        )?;

        debug!(deal_id = deal.id, "deal click tracked");

        Ok(deal)
    }

    /// Tracks the click and returns the link the visitor should be sent to.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the deal does not exist or the database fails.
    pub fn deal_redirect(&self, id: i64, client: &ClientInfo) -> Result<String, Error> {
        let deal = self.track_deal_click(id, client)?;

        Ok(deal.affiliate_link.unwrap_or_else(|| NO_LINK.to_owned()))
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn count_active_deals(&self) -> Result<u64, Error> {
        Ok(self.database.count_deals(true)?)
    }
}
