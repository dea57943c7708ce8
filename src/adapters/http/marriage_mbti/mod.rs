//! Marriage MBTI+ HTTP adapter module.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::marriage_mbti_routes;
