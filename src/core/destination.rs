//! Travel destinations.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tripcompare_primitives::pagination::Pagination;

use super::deal::Deal;
use super::error::Error;
use super::{now, validation, Backend};

pub const DEFAULT_FEATURED_LIMIT: u32 = 8;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const DEFAULT_DEALS_LIMIT: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    /// IATA city or airport code.
    pub city_code: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_featured: bool,
    pub avg_flight_price: Option<f64>,
    pub avg_hotel_price: Option<f64>,
    pub best_time_to_visit: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub city_code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub avg_flight_price: Option<f64>,
    #[serde(default)]
    pub avg_hotel_price: Option<f64>,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DestinationUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub avg_flight_price: Option<f64>,
    #[serde(default)]
    pub avg_hotel_price: Option<f64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Destination {
    fn apply(&mut self, update: DestinationUpdate, at: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.image_url.is_some() {
            self.image_url = update.image_url;
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
        if update.avg_flight_price.is_some() {
            self.avg_flight_price = update.avg_flight_price;
        }
        if update.avg_hotel_price.is_some() {
            self.avg_hotel_price = update.avg_hotel_price;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Some(at);
    }
}

impl Backend {
    /// # Errors
    ///
    /// Will return `Err` if the name or country is empty or the database fails.
    pub fn create_destination(&self, destination: &NewDestination) -> Result<Destination, Error> {
        validation::length("name", &destination.name, 1, 255)?;
        validation::length("country", &destination.country, 1, 255)?;

        Ok(self.database.insert_destination(destination, now())?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn list_destinations(&self, pagination: &Pagination, featured_only: bool) -> Result<Vec<Destination>, Error> {
        Ok(self.database.load_destinations(pagination, featured_only)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the database fails.
    pub fn featured_destinations(&self, limit: u32) -> Result<Vec<Destination>, Error> {
        self.list_destinations(&Pagination::new(0, limit), true)
    }

    /// Case-insensitive substring search on name, country and city code.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the query is shorter than two characters or the
    /// database fails.
    pub fn search_destinations(&self, query: &str, limit: u32) -> Result<Vec<Destination>, Error> {
        validation::length("q", query, 2, usize::MAX)?;

        Ok(self.database.search_destinations(query, limit)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the destination does not exist or the database fails.
    pub fn get_destination(&self, id: i64) -> Result<Destination, Error> {
        self.database.get_destination(id)?.ok_or(Error::not_found("Destination"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the destination does not exist or the database fails.
    pub fn update_destination(&self, id: i64, update: DestinationUpdate) -> Result<Destination, Error> {
        let mut destination = self.get_destination(id)?;

        destination.apply(update, now());

        self.database.save_destination(&destination)?;

        Ok(destination)
    }

    /// Active deals of a destination.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the destination does not exist or the database fails.
    pub fn destination_deals(&self, id: i64, limit: u32) -> Result<Vec<Deal>, Error> {
        let destination = self.get_destination(id)?;

        Ok(self.database.load_deals_by_destination(destination.id, limit)?)
    }
}
