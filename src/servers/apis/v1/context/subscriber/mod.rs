//! Newsletter subscribers API context.
//!
//! This API context is responsible for handling the newsletter sign-ups.
//!
//! # Endpoints
//!
//! - [Subscribe](#subscribe)
//! - [List subscribers](#list-subscribers)
//! - [Count subscribers](#count-subscribers)
//! - [Get a subscriber](#get-a-subscriber)
//! - [Update a subscriber](#update-a-subscriber)
//! - [Unsubscribe](#unsubscribe)
//!
//! Listing and counting are admin routes. They need the `token` param when
//! the API has access tokens configured.
//!
//! # Subscribe
//!
//! `POST /subscribers`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/api/v1/subscribers" \
//!   -H "Content-Type: application/json" \
//!   -d '{"email": "jane@example.com", "name": "Jane", "source": "footer"}'
//! ```
//!
//! **Example response** `201`
//!
//! ```json
//! {
//!   "id": 1,
//!   "email": "jane@example.com",
//!   "name": "Jane",
//!   "is_active": true,
//!   "source": "footer",
//!   "preferences": {"flights": true, "hotels": true, "experiences": true, "deals_frequency": "weekly"},
//!   "created_at": "2026-04-01T10:00:00Z",
//!   "updated_at": null
//! }
//! ```
//!
//! Subscribing again with an unsubscribed e-mail reactivates it. An active
//! e-mail gets a `400` with `{"detail": "Email already subscribed"}`.
//!
//! # List subscribers
//!
//! `GET /subscribers?skip=0&limit=100&active_only=true&token=MyAccessToken`
//!
//! # Count subscribers
//!
//! `GET /subscribers/count/total?active_only=true&token=MyAccessToken`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "total": 42,
//!   "active_only": true
//! }
//! ```
//!
//! # Get a subscriber
//!
//! `GET /subscribers/:email`
//!
//! # Update a subscriber
//!
//! `PATCH /subscribers/:email` with any of `name`, `is_active` and
//! `preferences`.
//!
//! # Unsubscribe
//!
//! `DELETE /subscribers/:email`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "message": "Successfully unsubscribed",
//!   "success": true
//! }
//! ```
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod routes;
