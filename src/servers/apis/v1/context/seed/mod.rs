//! Development seed API context.
//!
//! # Endpoints
//!
//! - `POST /seed` (admin): loads the sample destinations, deals and
//!   experiences. Records whose name or title already exists are skipped, so
//!   the endpoint can be called more than once.
//!
//! It is only available when `app.debug` is enabled. Otherwise it returns a
//! `403` with `{"detail": "Seeding only available in DEBUG mode"}`.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "Database seeded successfully",
//!   "destinations": 4,
//!   "deals": 4,
//!   "experiences": 4
//! }
//! ```
pub mod handlers;
pub mod resources;
pub mod routes;
