//! Use cases that combine several parts of the domain.
//!
//! - [Search](crate::core::services::search): affiliate search links, with
//!   the search logged for the analytics.
//! - [Prices](crate::core::services::prices): live partner prices enriched
//!   with booking links.
//! - [Analytics](crate::core::services::analytics): aggregations over the
//!   subscribers, clicks and searches.
pub mod analytics;
pub mod prices;
pub mod search;

use std::sync::Arc;

use tripcompare_configuration::Configuration;

use crate::core::Backend;

/// It returns a new backend building its dependencies.
///
/// # Panics
///
/// Will panic if the backend cannot be instantiated.
#[must_use]
pub fn backend_factory(config: &Arc<Configuration>) -> Backend {
    match Backend::new(config) {
        Ok(backend) => backend,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
