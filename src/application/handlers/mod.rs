//! Command handlers.

pub mod dream;
