//! API health check and service information endpoints.
//!
//! They are used to check if the service is running. Especially for
//! containers.
//!
//! # Endpoints
//!
//! - [Health Check](#health-check)
//! - [Service information](#service-information)
//!
//! # Health Check
//!
//! `GET /api/health_check`
//!
//! Returns the API status and whether the database answers. The status code
//! is `503` when the database is unreachable.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/api/health_check"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "status": "Ok",
//!   "database": "connected",
//!   "version": "1.0.0"
//! }
//! ```
//!
//! # Service information
//!
//! `GET /`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "name": "TripCompare API",
//!   "version": "1.0.0",
//!   "status": "healthy",
//!   "endpoints": {
//!     "subscribers": "/api/v1/subscribers",
//!     "destinations": "/api/v1/destinations",
//!     "deals": "/api/v1/deals",
//!     "experiences": "/api/v1/experiences",
//!     "search": "/api/v1/search",
//!     "analytics": "/api/v1/analytics"
//!   }
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Report`](crate::servers::apis::v1::context::health_check::resources::Report)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
