//! Destinations API context.
//!
//! # Endpoints
//!
//! - `POST /destinations` (admin): create a destination. Returns `201`.
//! - `GET /destinations?skip=0&limit=100&featured_only=false`
//! - `GET /destinations/search?q=bar&limit=10`: case-insensitive match on
//!   the name, country or city code. `q` needs at least two characters.
//! - `GET /destinations/featured?limit=8`
//! - `GET /destinations/:id`
//! - `PATCH /destinations/:id` (admin)
//! - `GET /destinations/:id/deals?limit=10`: active deals of the destination.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/v1/destinations/search?q=bar"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Barcelona",
//!     "country": "Spain",
//!     "city_code": "BCN",
//!     "description": "Gaudi, beaches and tapas.",
//!     "image_url": null,
//!     "latitude": 41.3874,
//!     "longitude": 2.1686,
//!     "is_featured": true,
//!     "avg_flight_price": 89.0,
//!     "avg_hotel_price": 120.0,
//!     "best_time_to_visit": "May to June",
//!     "tags": ["beach", "culture"],
//!     "created_at": "2026-04-01T10:00:00Z",
//!     "updated_at": null
//!   }
//! ]
//! ```
pub mod forms;
pub mod handlers;
pub mod routes;
