//! Primitive types for the TripCompare backend.
//!
//! These types are shared by the server crate and by the configuration and
//! test-helper packages.
use serde::{Deserialize, Serialize};

pub mod alert_type;
pub mod deal_type;
pub mod pagination;

/// The database management system used by the backend.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, derive_more::Display, Clone, Copy)]
pub enum DatabaseDriver {
    /// The `SQLite3` database driver.
    Sqlite3,
    /// The `MySQL` database driver.
    MySQL,
}
