//! Testing helpers for the TripCompare backend.
pub mod configuration;
pub mod random;
