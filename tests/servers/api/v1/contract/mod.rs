pub mod authentication;
pub mod context;
