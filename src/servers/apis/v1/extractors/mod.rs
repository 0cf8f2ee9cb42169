//! Axum [`extractors`](axum::extract) for the API v1.
//!
//! They wrap the `axum` and `axum-extra` extractors so that rejected requests
//! get the same JSON error body as the rest of the API.
pub mod client_info;
pub mod rejections;

pub use rejections::{Json, Path, Query};
