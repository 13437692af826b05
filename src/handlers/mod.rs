//! HTTP handlers for the Pokemon catalog.

pub mod pokemon;
pub use pokemon::*;
