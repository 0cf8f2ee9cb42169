//! Search API context.
//!
//! Searches do not return fares. They build the affiliate URL of the partner
//! that runs the search and log it for the analytics. The price endpoints
//! forward the query to the Travelpayouts data API and add booking links to
//! the fares it returns.
//!
//! # Endpoints
//!
//! Affiliate searches:
//!
//! - `POST /search/flights`: Aviasales.
//! - `POST /search/hotels`: Hotellook.
//! - `GET /search/experiences?destination=Barcelona&category=tours`:
//!   `GetYourGuide`.
//! - `GET /search/cars?pickup_location=BCN&pickup_date=2026-04-15&dropoff_date=2026-04-22`:
//!   Rentalcars.
//! - `POST /search/packages?origin=LON&destination=BCN&departure_date=2026-04-15&return_date=2026-04-22`:
//!   Aviasales with the hotel option.
//!
//! Partner prices:
//!
//! - `GET /search/flights/prices?origin=LON&destination=BCN`
//! - `GET /search/flights/calendar?origin=LON&destination=BCN&depart_date=2026-04`
//! - `GET /search/flights/popular?origin=LON`
//! - `GET /search/flights/latest?origin=LON&destination=BCN`
//! - `GET /search/hotels/prices?location=Barcelona&check_in=2026-04-15&check_out=2026-04-22`
//! - `GET /search/hotels/lookup?query=Barcel`
//! - `GET /search/widget/config`
//!
//! # Flight search
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/v1/search/flights" \
//!   -H "Content-Type: application/json" \
//!   -d '{"origin": "LON", "destination": "BCN", "departure_date": "2026-04-15", "return_date": "2026-04-22"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "search_url": "https://www.aviasales.com/search/LON1504BCN22041?marker=12345",
//!   "affiliate_provider": "aviasales",
//!   "parameters": {
//!     "origin": "LON",
//!     "destination": "BCN",
//!     "departure_date": "2026-04-15",
//!     "return_date": "2026-04-22",
//!     "travelers": 1,
//!     "cabin_class": "economy"
//!   }
//! }
//! ```
//!
//! Without a configured marker the search fails with a `500` and the detail
//! `Travelpayouts marker not configured...`. Price lookups also need the
//! partner token. Partner failures are returned as `502`, or with the status
//! returned by the partner.
pub mod handlers;
pub mod routes;
