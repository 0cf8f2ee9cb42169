//! RentalCars search links.
use chrono::{Datelike, NaiveDate, NaiveTime};

use super::{encode_query, Error, Marker};

pub const SEARCH_URL: &str = "https://www.rentalcars.com/SearchResults.do";

pub const DEFAULT_TIME: &str = "10:00";

/// A pick-up or drop-off date with an `HH:MM` time.
#[derive(Debug, Clone, Copy)]
pub struct Moment<'a> {
    pub date: NaiveDate,
    pub time: &'a str,
}

impl<'a> Moment<'a> {
    #[must_use]
    pub fn new(date: NaiveDate, time: &'a str) -> Self {
        Self { date, time }
    }
}

/// Splits an `HH:MM` time into hour and minute as written, so `9:05` gives
/// `9` and `05`.
///
/// # Errors
///
/// Will return `Err` if the value is not a valid `HH:MM` time.
pub fn hour_and_minute(value: &str) -> Result<(String, String), Error> {
    let invalid = || Error::InvalidTime { value: value.to_owned() };

    let time = value.trim();

    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())?;

    let (hour, minute) = time.split_once(':').ok_or_else(invalid)?;

    Ok((hour.to_owned(), minute.to_owned()))
}

/// # Errors
///
/// Will return `Err` if either time is not a valid `HH:MM` time.
pub fn search_url(location: &str, pickup: Moment<'_>, dropoff: Moment<'_>, marker: &Marker) -> Result<String, Error> {
    let (pickup_hour, pickup_minute) = hour_and_minute(pickup.time)?;
    let (dropoff_hour, dropoff_minute) = hour_and_minute(dropoff.time)?;

    let query = encode_query(&[
        ("country", location),
        ("puDay", &pickup.date.day().to_string()),
        ("puMonth", &pickup.date.month().to_string()),
        ("puYear", &pickup.date.year().to_string()),
        ("puHour", &pickup_hour),
        ("puMinute", &pickup_minute),
        ("doDay", &dropoff.date.day().to_string()),
        ("doMonth", &dropoff.date.month().to_string()),
        ("doYear", &dropoff.date.year().to_string()),
        ("doHour", &dropoff_hour),
        ("doMinute", &dropoff_minute),
        ("affiliateCode", marker.as_str()),
    ]);

    Ok(format!("{SEARCH_URL}?{query}"))
}
