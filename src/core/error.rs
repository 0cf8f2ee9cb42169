//! Errors returned by the core [`Backend`](crate::core::Backend).
//!
//! Error | Context | Description
//! ---|---|---
//! `NotFound` | Catalog | The requested record does not exist.
//! `AlreadySubscribed` | Newsletter | An active subscription exists for the e-mail.
//! `InvalidInput` | Validation | A request value breaks a field constraint.
//! `SeedingDisabled` | Development | Sample data can only be loaded in debug mode.
//! `Database` | Persistence | The storage driver failed.
//! `Affiliate` | Links | A partner identifier is missing or a link parameter is invalid.
//! `PartnerApi` | Prices | The partner data API failed or is not configured.
use super::databases;
use crate::{affiliate, travelpayouts};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Email already subscribed")]
    AlreadySubscribed { email: String },

    #[error("Invalid value for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Seeding only available in DEBUG mode")]
    SeedingDisabled,

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: databases::error::Error,
    },

    #[error(transparent)]
    Affiliate(#[from] affiliate::Error),

    #[error(transparent)]
    PartnerApi(#[from] travelpayouts::Error),
}

impl Error {
    #[must_use]
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }
}
