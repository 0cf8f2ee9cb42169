//! Request bodies used by several contexts.
use serde_json::{json, Value};

pub fn new_destination(name: &str) -> Value {
    json!({
        "name": name,
        "country": "Spain",
        "city_code": "BCN",
        "description": "Gaudi, beaches and tapas.",
        "is_featured": true,
        "avg_flight_price": 89.0,
        "avg_hotel_price": 120.0,
        "tags": ["beach", "culture"]
    })
}

pub fn new_deal(title: &str, deal_type: &str, original_price: f64, deal_price: f64) -> Value {
    json!({
        "title": title,
        "deal_type": deal_type,
        "origin_city": "London",
        "original_price": original_price,
        "deal_price": deal_price,
        "affiliate_link": "https://www.aviasales.com/search/LON1504BCN22041?marker=tripcompare-test",
        "affiliate_provider": "aviasales",
        "travel_dates": "Apr 15-22"
    })
}

pub fn new_experience(title: &str, price: f64, rating: Option<f64>) -> Value {
    json!({
        "title": title,
        "price": price,
        "rating": rating,
        "review_count": 120,
        "category": "tours",
        "affiliate_link": "https://www.getyourguide.com/barcelona-l45/?partner_id=GYG-TEST"
    })
}
