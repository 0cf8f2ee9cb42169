//! The TripCompare REST API with all its versions.
//!
//! Endpoints for the latest API: [v1].
//!
//! Most endpoints are public. The admin routes (subscriber listings,
//! analytics, seeding and the catalog create and update operations) require
//! an authorization token when the configuration has access tokens. The
//! default configuration uses `?token=MyAccessToken`. Refer to
//! [Authentication](#authentication) for more information.
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Authentication](#authentication)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//! - [Errors](#errors)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](tripcompare_configuration::HttpApi)
//! section:
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:8000"
//! cors_origins = ["http://localhost:3000", "http://localhost:5173"]
//! on_reverse_proxy = false
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! Refer to [`tripcompare-configuration`](tripcompare_configuration) for more
//! information about the API configuration.
//!
//! You can test the API with `curl`:
//!
//! ```bash
//! $ curl -s "http://127.0.0.1:8000/api/v1/deals/hot"
//! ```
//!
//! # Authentication
//!
//! Admin routes take the token as a GET param:
//!
//! ```bash
//! $ curl -s "http://127.0.0.1:8000/api/v1/analytics/dashboard?token=MyAccessToken"
//! ```
//!
//! A missing token returns a `401` with `{"detail": "unauthorized"}` and an
//! unknown one a `401` with `{"detail": "token not valid"}`.
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The API server
//! runs all the API versions on the same server using the same port.
//! Currently there is only one API version: [v1].
//!
//! # Endpoints
//!
//! - `GET /`: service name, version and the path of each context.
//! - `GET /api/health_check`: API status and database reachability.
//! - `/api/v1/...`: refer to the [v1] contexts.
//!
//! # Errors
//!
//! Errors are JSON objects with a `detail` field:
//!
//! Status | Reason
//! ---|---
//! `400` | Invalid request value or duplicate subscription.
//! `401` | Missing or invalid admin token.
//! `403` | Seeding outside debug mode.
//! `404` | Unknown record.
//! `500` | Missing partner credential or database failure.
//! `502` | Partner API unreachable or returning unexpected data.
//!
//! Error statuses returned by the partner API are forwarded.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The API versions. Every version has its own module with its own set of
/// routes.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the API.
    V1,
}
