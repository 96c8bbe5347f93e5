//! HTTP adapter module.
//!
//! A thin axum surface over the five engine operations plus the city
//! price sheet. Payloads come straight from the application layer; no
//! markup, no framework types leak in.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ApiState;
pub use routes::api_routes;
