//! Foundation - shared value objects and error types for the domain layer.

mod errors;
mod ids;
mod intensity;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DreamId, SessionId};
pub use intensity::Intensity;
pub use timestamp::Timestamp;
