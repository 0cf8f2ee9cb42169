//! Hotellook hotel search links.
//!
//! Links built from partner price data pass the hotel `locationId` as the
//! destination.
use chrono::NaiveDate;

use super::{encode_query, iso_date, Marker};

pub const SEARCH_URL: &str = "https://search.hotellook.com";

#[must_use]
pub fn search_url(destination: &str, check_in: NaiveDate, check_out: NaiveDate, adults: u8, marker: &Marker) -> String {
    let query = encode_query(&[
        ("destination", destination),
        ("checkIn", &iso_date(check_in)),
        ("checkOut", &iso_date(check_out)),
        ("adults", &adults.to_string()),
        ("marker", marker.as_str()),
    ]);

    format!("{SEARCH_URL}?{query}")
}
