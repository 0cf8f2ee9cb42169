//! **TripCompare** is a travel deal aggregation backend written in
//! [Rust Language](https://www.rust-lang.org/).
//!
//! It stores a catalog of destinations, deals and experiences, builds
//! affiliate links for the travel partners and queries the Travelpayouts data
//! API for live prices. Every search and outbound click is logged so the
//! analytics can estimate the affiliate revenue.
//!
//! # Table of contents
//!
//! - [Components](#components)
//! - [Run with cargo](#run-with-cargo)
//! - [Configuration](#configuration)
//! - [Services](#services)
//!
//! # Components
//!
//! From the end-user perspective the backend exposes one service: the
//! [REST API](crate::servers::apis). Internally it is organized in layers:
//!
//! - The [`core`] domain layer: the [`Backend`](crate::core::Backend) with
//!   the catalog, newsletter, tracking, price alert and analytics use cases,
//!   and the [database drivers](crate::core::databases).
//! - The [`affiliate`] link builders for Aviasales, Hotellook, `GetYourGuide`
//!   and Rentalcars.
//! - The [`travelpayouts`] data API client.
//! - The [`servers`] delivery layer.
//!
//! # Run with cargo
//!
//! ```text
//! git clone https://github.com/tripcompare/tripcompare-backend.git \
//!   && cd tripcompare-backend \
//!   && cargo build --release \
//!   && mkdir -p ./storage/tripcompare/lib/database
//! ```
//!
//! To run the backend with the default development configuration:
//!
//! ```text
//! cargo run
//! ```
//!
//! The API listens on `http://127.0.0.1:8000`. Load the sample catalog with:
//!
//! ```text
//! curl -X POST "http://127.0.0.1:8000/api/v1/seed?token=MyAccessToken"
//! ```
//!
//! # Configuration
//!
//! The configuration is loaded from
//! `./share/default/config/tripcompare.development.sqlite3.toml` unless
//! `TRIPCOMPARE_CONFIG_TOML_PATH` points to another file or
//! `TRIPCOMPARE_CONFIG_TOML` contains the whole document. Partner
//! credentials are usually injected with environment variables:
//!
//! ```text
//! TRIPCOMPARE_TRAVELPAYOUTS__TOKEN="..." \
//!   TRIPCOMPARE_TRAVELPAYOUTS__MARKER="..." \
//!   cargo run
//! ```
//!
//! Refer to the [`tripcompare-configuration`](tripcompare_configuration)
//! crate for every option.
//!
//! # Services
//!
//! Refer to the [REST API documentation](crate::servers::apis) for the
//! endpoints, the authentication of the admin routes and the error format.
pub mod affiliate;
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
pub mod travelpayouts;
