//! Analytics API context.
//!
//! Traffic figures built from the search and click logs, plus the price
//! alerts registered by visitors.
//!
//! # Endpoints
//!
//! Admin routes:
//!
//! - `GET /analytics/dashboard?days=30`
//! - `GET /analytics/clicks?days=30`
//! - `GET /analytics/subscribers`
//! - `GET /analytics/destinations?limit=10`
//! - `GET /analytics/revenue-estimate?clicks=1000&conversion_rate=0.02&avg_booking_value=150&commission_rate=0.05`
//!
//! Price alerts:
//!
//! - `POST /analytics/price-alerts`: returns `201`.
//! - `GET /analytics/price-alerts/:email`: active alerts of the e-mail.
//! - `DELETE /analytics/price-alerts/:id?email=jane@example.com`: the alert
//!   is only deactivated when the e-mail matches.
//!
//! `days` must be within `1..=365` and `limit` within `1..=50`.
//!
//! # Dashboard
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/v1/analytics/dashboard?days=7&token=MyAccessToken"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "total_subscribers": 42,
//!   "total_clicks": 318,
//!   "total_deals": 12,
//!   "top_destinations": [{"name": "Barcelona", "searches": 51}],
//!   "clicks_by_provider": {"aviasales": 120, "getyourguide": 198},
//!   "recent_signups": 5
//! }
//! ```
//!
//! # Revenue estimate
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "clicks": 1000,
//!   "conversion_rate": "2.00%",
//!   "estimated_bookings": 20.0,
//!   "avg_booking_value": "€150.00",
//!   "gross_booking_value": "€3000.00",
//!   "commission_rate": "5.00%",
//!   "estimated_monthly_revenue": "€150.00",
//!   "note": "These are estimates. Actual results vary by provider and conversion rates."
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
