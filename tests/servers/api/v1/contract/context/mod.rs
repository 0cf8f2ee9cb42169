pub mod analytics;
pub mod deal;
pub mod destination;
pub mod experience;
pub mod health_check;
pub mod search;
pub mod seed;
pub mod subscriber;
