//! Embeddable Travelpayouts search widgets.
use serde::Serialize;

use super::{encode_query, Marker};

pub const WIDGET_SCRIPT_URL: &str = "https://tp.media/content";
pub const DOCUMENTATION_URL: &str = "https://support.travelpayouts.com/hc/en-us/categories/200358578-API";

pub const FLIGHT_CONTAINER_ID: &str = "tp-flight-widget";
pub const HOTEL_CONTAINER_ID: &str = "tp-hotel-widget";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub script: String,
    pub container_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub token_configured: bool,
    pub marker: String,
    pub flight_widget: Widget,
    pub hotel_widget: Widget,
    pub documentation: String,
}

fn script_url(marker: &Marker, search_url: &str) -> String {
    let query = encode_query(&[
        ("trs", marker.as_str()),
        ("shmarker", marker.as_str()),
        ("locale", "en_GB"),
        ("currency", "eur"),
        ("powered_by", "true"),
        ("searchUrl", search_url),
    ]);

    format!("{WIDGET_SCRIPT_URL}?{query}")
}

#[must_use]
pub fn config(marker: &Marker, token_configured: bool) -> WidgetConfig {
    WidgetConfig {
        token_configured,
        marker: marker.to_string(),
        flight_widget: Widget {
            script: script_url(marker, "www.aviasales.com/search"),
            container_id: FLIGHT_CONTAINER_ID.to_owned(),
        },
        hotel_widget: Widget {
            script: script_url(marker, "search.hotellook.com"),
            container_id: HOTEL_CONTAINER_ID.to_owned(),
        },
        documentation: DOCUMENTATION_URL.to_owned(),
    }
}
