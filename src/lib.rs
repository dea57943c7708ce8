//! Match Compass - Matchmaking Support Diagnostics
//!
//! This crate implements the two diagnostic engines behind the matchmaking
//! support service: a six-dimension personality assessment and the
//! Marriage MBTI+ combined assessment, exposed over HTTP.

pub mod adapters;
pub mod config;
pub mod domain;
