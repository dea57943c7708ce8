//! Domain layer containing the diagnostic engines.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (validation errors)
//! - `personality` - Six-dimension personality assessment
//! - `marriage_mbti` - Marriage MBTI+ combined assessment

pub mod foundation;
pub mod marriage_mbti;
pub mod personality;
