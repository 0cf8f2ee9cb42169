//! API is organized in resource groups called contexts.
//!
//! Each context is a module that contains the API endpoints related to a
//! specific resource group.
pub mod analytics;
pub mod deal;
pub mod destination;
pub mod experience;
pub mod health_check;
pub mod search;
pub mod seed;
pub mod subscriber;
