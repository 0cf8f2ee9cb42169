//! Travel deals API context.
//!
//! # Endpoints
//!
//! - `POST /deals` (admin): create a deal. The discount percentage is derived
//!   from the original and deal prices. Returns `201`.
//! - `GET /deals?skip=0&limit=20&deal_type=flight&featured_only=false`:
//!   active deals, newest first.
//! - `GET /deals/featured?limit=6`
//! - `GET /deals/hot?limit=10`: the biggest discounts among the most recent
//!   active deals.
//! - `GET /deals/flights`, `GET /deals/hotels`, `GET /deals/packages`:
//!   active deals of one type, `limit` defaults to 10.
//! - `GET /deals/:id`
//! - `PATCH /deals/:id` (admin)
//! - `POST /deals/:id/click`: counts a click and logs it.
//! - `GET /deals/:id/redirect`: counts a click and returns the affiliate link.
//!
//! # Track a click
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/v1/deals/1/click"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "Click tracked",
//!   "success": true
//! }
//! ```
//!
//! # Redirect
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "affiliate_link": "https://www.aviasales.com/search/LON1504BCN22041?marker=12345"
//! }
//! ```
//!
//! Deals without a link return `"#"`.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
