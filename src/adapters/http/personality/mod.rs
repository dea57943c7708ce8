//! Personality assessment HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use routes::personality_routes;
