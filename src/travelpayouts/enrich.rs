//! Adds affiliate booking links to Travelpayouts responses.
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use crate::affiliate::{aviasales, hotellook, Marker};

const BOOKING_LINK: &str = "booking_link";

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(fields)) => !fields.is_empty(),
    }
}

fn is_successful(response: &Value) -> bool {
    is_truthy(response.get("success")) && is_truthy(response.get("data"))
}

fn text<'a>(fare: &'a Value, field: &str) -> Option<&'a str> {
    fare.get(field).and_then(Value::as_str)
}

fn fare_link(origin: &str, destination: &str, fare: &Value, marker: &Marker) -> String {
    aviasales::link_from_timestamps(
        origin,
        destination,
        text(fare, "departure_at").unwrap_or_default(),
        text(fare, "return_at"),
        marker,
    )
}

/// Cheapest and direct prices: `data` maps a destination code to fares.
#[must_use]
pub fn cheapest_prices(mut response: Value, origin: &str, marker: &Marker) -> Value {
    if !is_successful(&response) {
        return response;
    }

    if let Some(destinations) = response.get_mut("data").and_then(Value::as_object_mut) {
        for (destination, fares) in destinations.iter_mut() {
            let Some(fares) = fares.as_object_mut() else { continue };

            for fare in fares.values_mut() {
                let link = fare_link(origin, destination, fare, marker);

                if let Some(fare) = fare.as_object_mut() {
                    fare.insert(BOOKING_LINK.to_owned(), Value::String(link));
                }
            }
        }
    }

    response
}

/// Latest prices: `data` is a list of fares with their own route.
#[must_use]
pub fn latest_prices(mut response: Value, origin: &str, destination: &str, marker: &Marker) -> Value {
    if !is_successful(&response) {
        return response;
    }

    if let Some(fares) = response.get_mut("data").and_then(Value::as_array_mut) {
        for fare in fares {
            let link = fare_link(
                text(fare, "origin").unwrap_or(origin),
                text(fare, "destination").unwrap_or(destination),
                fare,
                marker,
            );

            if let Some(fare) = fare.as_object_mut() {
                fare.insert(BOOKING_LINK.to_owned(), Value::String(link));
            }
        }
    }

    response
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PopularDestination {
    pub origin: String,
    pub destination: String,
    pub price: Value,
    pub transfers: Value,
    pub airline: Value,
    pub departure_at: String,
    pub return_at: String,
    pub search_link: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PopularDestinations {
    pub success: bool,
    pub origin: String,
    pub destinations: Vec<PopularDestination>,
    pub count: usize,
}

fn price_key(destination: &PopularDestination) -> f64 {
    destination.price.as_f64().unwrap_or(f64::INFINITY)
}

/// City directions, flattened into a list sorted by price, cheapest first.
#[must_use]
pub fn popular_destinations(response: &Value, origin: &str, marker: &Marker) -> PopularDestinations {
    let origin = origin.to_uppercase();

    let mut destinations: Vec<PopularDestination> = Vec::new();

    if is_successful(response) {
        if let Some(directions) = response.get("data").and_then(Value::as_object) {
            for (destination, info) in directions {
                destinations.push(PopularDestination {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    price: info.get("price").cloned().unwrap_or_else(|| json!(0)),
                    transfers: info.get("transfers").cloned().unwrap_or_else(|| json!(1)),
                    airline: info.get("airline").cloned().unwrap_or(Value::Null),
                    departure_at: text(info, "departure_at").unwrap_or_default().to_owned(),
                    return_at: text(info, "return_at").unwrap_or_default().to_owned(),
                    search_link: aviasales::popular_destination_url(&origin, destination, marker),
                });
            }
        }
    }

    destinations.sort_by(|a, b| price_key(a).total_cmp(&price_key(b)));

    PopularDestinations {
        success: true,
        origin,
        count: destinations.len(),
        destinations,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HotelPrices {
    pub success: bool,
    pub hotels: Vec<Value>,
    pub count: usize,
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Hotel cache prices: every hotel links to a Hotellook search of its
/// location.
#[must_use]
pub fn hotel_prices(response: Value, location: &str, check_in: NaiveDate, check_out: NaiveDate, adults: u8, marker: &Marker) -> HotelPrices {
    let mut hotels = match response {
        Value::Array(hotels) => hotels,
        _ => Vec::new(),
    };

    for hotel in &mut hotels {
        let destination = match hotel.get("locationId") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => location.to_owned(),
        };

        let link = hotellook::search_url(&destination, check_in, check_out, adults, marker);

        if let Some(hotel) = hotel.as_object_mut() {
            hotel.insert(BOOKING_LINK.to_owned(), Value::String(link));
        }
    }

    HotelPrices {
        success: true,
        count: hotels.len(),
        hotels,
        location: location.to_owned(),
        check_in,
        check_out,
    }
}
