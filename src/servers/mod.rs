//! Servers. The REST API is the only one.
pub mod apis;
pub mod signals;
