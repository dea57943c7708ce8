//! Adapters connecting the domain engines to the outside world.

pub mod http;
