//! Dream Repository Port - persistence gateway for dream records.
//!
//! The core addresses the data store through a single write operation. No
//! read, update, or delete operations are part of the core's contract; once
//! inserted, the store is the sole source of truth for a record.

use async_trait::async_trait;

use crate::domain::dream::{Dream, DreamDraft};
use crate::domain::foundation::DomainError;

/// Port for dream record persistence.
#[async_trait]
pub trait DreamRepository: Send + Sync {
    /// Inserts a draft, returning the stored record with its store-assigned
    /// identifier and timestamp.
    ///
    /// Failures are surfaced to the caller as a distinguishable error; a
    /// persistence failure is never masked by the interpretation fallback.
    async fn insert(&self, draft: DreamDraft) -> Result<Dream, DomainError>;
}
