//! Affiliate searches.
//!
//! A search validates the request, logs flight, hotel and experience
//! searches for the analytics, and answers with the partner link the
//! visitor should follow. Car and package searches are not logged.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::affiliate::rentalcars::{self, Moment};
use crate::core::error::Error;
use crate::core::tracking::{start_of_day, ClientInfo, NewSearchLog, SearchType};
use crate::core::{validation, Backend};

pub const AVIASALES: &str = "aviasales";
pub const HOTELLOOK: &str = "hotellook";
pub const GETYOURGUIDE: &str = "getyourguide";
pub const RENTALCARS: &str = "rentalcars";

pub const DEFAULT_CABIN_CLASS: &str = "economy";
pub const DEFAULT_PACKAGE_TRAVELERS: u8 = 2;

fn one() -> u8 {
    1
}

fn default_cabin_class() -> String {
    DEFAULT_CABIN_CLASS.to_owned()
}

fn default_package_travelers() -> u8 {
    DEFAULT_PACKAGE_TRAVELERS
}

fn default_time() -> String {
    rentalcars::DEFAULT_TIME.to_owned()
}

/// The partner link for a search and the parameters it was built from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub search_url: String,
    pub affiliate_provider: String,
    pub parameters: Map<String, Value>,
}

impl SearchResult {
    fn new(search_url: String, affiliate_provider: &str, parameters: Value) -> Self {
        Self {
            search_url,
            affiliate_provider: affiliate_provider.to_owned(),
            parameters: match parameters {
                Value::Object(parameters) => parameters,
                _ => Map::new(),
            },
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "one")]
    pub travelers: u8,
    #[serde(default = "default_cabin_class")]
    pub cabin_class: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HotelSearch {
    pub destination: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "one")]
    pub guests: u8,
    #[serde(default = "one")]
    pub rooms: u8,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExperienceSearch {
    pub destination: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CarSearch {
    pub pickup_location: String,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate,
    /// `HH:MM`
    #[serde(default = "default_time")]
    pub pickup_time: String,
    /// `HH:MM`
    #[serde(default = "default_time")]
    pub dropoff_time: String,
}

/// Flight and hotel combined.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageSearch {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(default = "default_package_travelers")]
    pub travelers: u8,
}

/// Aviasales search.
///
/// # Errors
///
/// Will return `Err` if the request is invalid, no marker is configured or
/// the search cannot be logged. Nothing is logged when the link fails.
pub fn flights(backend: &Backend, search: &FlightSearch, client: &ClientInfo) -> Result<SearchResult, Error> {
    validation::length("origin", &search.origin, 2, 100)?;
    validation::length("destination", &search.destination, 2, 100)?;
    validation::range("travelers", search.travelers, 1, 9)?;

    let links = backend.links();

    let search_url = links.flight(
        &search.origin,
        &search.destination,
        search.departure_date,
        search.return_date,
        search.travelers,
    )?;

    backend.log_search(&NewSearchLog {
        search_type: SearchType::Flight,
        origin: Some(search.origin.clone()),
        destination: search.destination.clone(),
        check_in: Some(start_of_day(search.departure_date)),
        check_out: search.return_date.map(start_of_day),
        travelers: i64::from(search.travelers),
        client: client.clone(),
    })?;

    Ok(SearchResult::new(
        search_url,
        AVIASALES,
        json!({
            "origin": search.origin,
            "destination": search.destination,
            "departure_date": search.departure_date,
            "return_date": search.return_date,
            "travelers": search.travelers,
            "cabin_class": search.cabin_class,
            "marker": links.marker()?.as_str(),
        }),
    ))
}

/// Hotellook search.
///
/// # Errors
///
/// Will return `Err` if the request is invalid, no marker is configured or
/// the search cannot be logged. Nothing is logged when the link fails.
pub fn hotels(backend: &Backend, search: &HotelSearch, client: &ClientInfo) -> Result<SearchResult, Error> {
    validation::length("destination", &search.destination, 2, 100)?;
    validation::range("guests", search.guests, 1, 10)?;
    validation::range("rooms", search.rooms, 1, 5)?;

    let links = backend.links();

    let search_url = links.hotel(&search.destination, search.check_in, search.check_out, search.guests)?;

    backend.log_search(&NewSearchLog {
        search_type: SearchType::Hotel,
        origin: None,
        destination: search.destination.clone(),
        check_in: Some(start_of_day(search.check_in)),
        check_out: Some(start_of_day(search.check_out)),
        travelers: i64::from(search.guests),
        client: client.clone(),
    })?;

    Ok(SearchResult::new(
        search_url,
        HOTELLOOK,
        json!({
            "destination": search.destination,
            "check_in": search.check_in,
            "check_out": search.check_out,
            "guests": search.guests,
            "rooms": search.rooms,
            "marker": links.marker()?.as_str(),
        }),
    ))
}

/// GetYourGuide search.
///
/// # Errors
///
/// Will return `Err` if the destination is too short, no GetYourGuide partner
/// id is configured or the search cannot be logged.
pub fn experiences(backend: &Backend, search: &ExperienceSearch, client: &ClientInfo) -> Result<SearchResult, Error> {
    validation::length("destination", &search.destination, 2, 100)?;

    let search_url = backend.links().experience(&search.destination, search.date)?;

    backend.log_search(&NewSearchLog {
        search_type: SearchType::Experience,
        origin: None,
        destination: search.destination.clone(),
        check_in: search.date.map(start_of_day),
        check_out: None,
        travelers: 1,
        client: client.clone(),
    })?;

    Ok(SearchResult::new(
        search_url,
        GETYOURGUIDE,
        json!({
            "destination": search.destination,
            "date": search.date,
            "category": search.category,
        }),
    ))
}

/// RentalCars search.
///
/// # Errors
///
/// Will return `Err` if the location is too short, a time is not `HH:MM` or
/// no marker is configured.
pub fn cars(backend: &Backend, search: &CarSearch) -> Result<SearchResult, Error> {
    validation::length("pickup_location", &search.pickup_location, 2, 100)?;

    let search_url = backend.links().car_rental(
        &search.pickup_location,
        Moment::new(search.pickup_date, &search.pickup_time),
        Moment::new(search.dropoff_date, &search.dropoff_time),
    )?;

    Ok(SearchResult::new(
        search_url,
        RENTALCARS,
        json!({
            "pickup_location": search.pickup_location,
            "pickup_date": search.pickup_date,
            "dropoff_date": search.dropoff_date,
        }),
    ))
}

/// Flight and hotel package, searched on Aviasales.
///
/// # Errors
///
/// Will return `Err` if the request is invalid or no marker is configured.
pub fn packages(backend: &Backend, search: &PackageSearch) -> Result<SearchResult, Error> {
    validation::length("origin", &search.origin, 2, 100)?;
    validation::length("destination", &search.destination, 2, 100)?;
    validation::range("travelers", search.travelers, 1, 9)?;

    let search_url = backend.links().package(
        &search.origin,
        &search.destination,
        search.departure_date,
        search.return_date,
        search.travelers,
    )?;

    Ok(SearchResult::new(
        search_url,
        AVIASALES,
        json!({
            "origin": search.origin,
            "destination": search.destination,
            "departure_date": search.departure_date,
            "return_date": search.return_date,
            "travelers": search.travelers,
        }),
    ))
}
