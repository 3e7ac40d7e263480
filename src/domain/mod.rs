//! Domain layer - entities, value objects, and pure interpretation logic.

pub mod dream;
pub mod foundation;
pub mod interpretation;
