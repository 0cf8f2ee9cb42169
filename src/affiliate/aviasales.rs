//! Aviasales flight search links.
//!
//! A search path concatenates the origin code, the departure day and month,
//! the destination code, the optional return day and month, and the number
//! of travelers: `LON1504BCN22041` is a round trip London to Barcelona,
//! leaving on 15 April and returning on 22 April, for one traveler.
use chrono::NaiveDate;

use super::{encode_query, Marker};

pub const SEARCH_URL: &str = "https://www.aviasales.com/search";

/// Travelers used for links built from partner price data.
pub const DEFAULT_TRAVELERS: u8 = 1;

/// Uppercases a city name or code and keeps its first three characters.
#[must_use]
pub fn location_code(value: &str) -> String {
    value.trim().to_uppercase().chars().take(3).collect()
}

/// `DDMM` segment of a date.
#[must_use]
pub fn day_month(date: NaiveDate) -> String {
    date.format("%d%m").to_string()
}

/// `DDMM` segment of a partner timestamp such as `2026-04-15T10:30:00Z`.
///
/// Returns `None` when the value is shorter than a full date.
#[must_use]
pub fn timestamp_day_month(timestamp: &str) -> Option<String> {
    let day = timestamp.get(8..10)?;
    let month = timestamp.get(5..7)?;

    Some(format!("{day}{month}"))
}

#[must_use]
pub fn search_path(origin: &str, destination: &str, departure: NaiveDate, return_date: Option<NaiveDate>, travelers: u8) -> String {
    path(
        &location_code(origin),
        &day_month(departure),
        &location_code(destination),
        return_date.map(day_month).as_deref(),
        travelers,
    )
}

fn path(origin: &str, departure: &str, destination: &str, return_segment: Option<&str>, travelers: u8) -> String {
    match return_segment {
        Some(return_segment) => format!("{origin}{departure}{destination}{return_segment}{travelers}"),
        None => format!("{origin}{departure}{destination}{travelers}"),
    }
}

#[must_use]
pub fn search_url(path: &str, marker: &Marker) -> String {
    format!("{SEARCH_URL}/{path}?{}", encode_query(&[("marker", marker.as_str())]))
}

/// Link for a fare returned by the partner price API.
///
/// Returns an empty string when the departure timestamp is missing or
/// malformed. A malformed return timestamp gives a one-way link.
#[must_use]
pub fn link_from_timestamps(origin: &str, destination: &str, departure_at: &str, return_at: Option<&str>, marker: &Marker) -> String {
    let Some(departure) = timestamp_day_month(departure_at) else {
        return String::new();
    };

    let return_segment = return_at.and_then(timestamp_day_month);

    let path = path(
        &location_code(origin),
        &departure,
        &location_code(destination),
        return_segment.as_deref(),
        DEFAULT_TRAVELERS,
    );

    search_url(&path, marker)
}

/// Open-date link from an origin to a popular destination.
#[must_use]
pub fn popular_destination_url(origin: &str, destination: &str, marker: &Marker) -> String {
    let path = format!(
        "{}{}{DEFAULT_TRAVELERS}",
        location_code(origin),
        location_code(destination)
    );

    search_url(&path, marker)
}
