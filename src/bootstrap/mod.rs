//! TripCompare application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. The REST API server is the only one.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
