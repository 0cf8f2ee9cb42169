//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Subscribers` | Newsletter sign-ups | [`v1`](crate::servers::apis::v1::context::subscriber)
//! `Destinations` | Travel destinations | [`v1`](crate::servers::apis::v1::context::destination)
//! `Deals` | Discounted flights, hotels and packages | [`v1`](crate::servers::apis::v1::context::deal)
//! `Experiences` | Tours and activities | [`v1`](crate::servers::apis::v1::context::experience)
//! `Search` | Affiliate searches and partner prices | [`v1`](crate::servers::apis::v1::context::search)
//! `Analytics` | Traffic figures and price alerts | [`v1`](crate::servers::apis::v1::context::analytics)
//! `Seed` | Sample data for development | [`v1`](crate::servers::apis::v1::context::seed)
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the admin routes.
pub mod context;
pub mod extractors;
pub mod middlewares;
pub mod responses;
pub mod routes;
