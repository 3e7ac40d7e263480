//! Dream Lens - AI-assisted dream interpretation service.
//!
//! Accepts free-text dream descriptions, obtains a structured interpretation
//! from a chat-completion model, derives chart-ready visual data, and stores
//! the resulting dream record. A fixed, schema-valid fallback interpretation
//! keeps the service usable whenever the model path is unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
