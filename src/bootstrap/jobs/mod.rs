//! Application jobs launchers.
//!
//! The main application setup has only one job:
//!
//! - [REST API](crate::bootstrap::jobs::http_api)
pub mod http_api;
