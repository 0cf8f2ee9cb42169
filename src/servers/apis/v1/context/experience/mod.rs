//! Experiences API context.
//!
//! Tours and activities sold through `GetYourGuide` and other partners.
//!
//! # Endpoints
//!
//! - `POST /experiences` (admin): returns `201`.
//! - `GET /experiences?skip=0&limit=20&destination_id=1&category=tours`:
//!   active experiences, best rated first. Unrated ones go last.
//! - `GET /experiences/categories`: the fixed list of categories.
//! - `GET /experiences/top-rated?limit=10`
//! - `GET /experiences/:id`
//! - `POST /experiences/:id/click`: logs a click for the analytics.
//!
//! **Example response** for `GET /experiences/categories`
//!
//! ```json
//! ["tours", "food", "adventure", "culture", "nightlife", "nature", "sports", "wellness"]
//! ```
pub mod forms;
pub mod handlers;
pub mod routes;
