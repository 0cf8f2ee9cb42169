//! GetYourGuide experience search links.
use chrono::NaiveDate;

use super::{encode_query, iso_date};

pub const SEARCH_URL: &str = "https://www.getyourguide.com/s/";

#[must_use]
pub fn search_url(destination: &str, date: Option<NaiveDate>, partner_id: &str) -> String {
    let date = date.map(iso_date);

    let mut pairs = vec![("q", destination)];

    if let Some(date) = &date {
        pairs.push(("date_from", date));
    }

    pairs.push(("partner_id", partner_id));

    format!("{SEARCH_URL}?{}", encode_query(&pairs))
}
