//! Dream entity - the persisted unit of a submission.
//!
//! A dream record combines the raw input text with its interpretation and
//! derived visual data. It is created exactly once per successful submission
//! and never updated or deleted afterward; the data store is the sole source
//! of truth once the insert completes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, DreamId, SessionId, Timestamp};
use crate::domain::interpretation::{DreamInterpretation, VisualData};

/// A persisted dream record.
///
/// `id` and `created_at` are assigned by the data store at insert time.
/// Wire field names are snake_case, matching the stored record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: DreamId,
    pub dream_text: String,
    /// Opaque URL of a captured recording, if any. Never interpreted.
    pub audio_url: Option<String>,
    pub interpretation: Option<DreamInterpretation>,
    pub visual_data: Option<VisualData>,
    pub created_at: Timestamp,
    pub session_id: SessionId,
}

/// A dream record awaiting insertion.
///
/// Carries everything except the store-assigned identifier and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DreamDraft {
    pub dream_text: String,
    pub audio_url: Option<String>,
    pub interpretation: Option<DreamInterpretation>,
    pub visual_data: Option<VisualData>,
    pub session_id: SessionId,
}

/// Errors surfaced by the dream submission flow.
///
/// Model-side failures are deliberately absent: they are recovered locally
/// by substituting the fallback interpretation and never escape as errors.
#[derive(Debug, Error)]
pub enum DreamError {
    /// Empty or whitespace-only dream text. Rejected before any network call.
    #[error("dream text is required")]
    EmptyDreamText,

    /// The data store rejected or could not perform the write. Unlike model
    /// failures, this is surfaced to the caller, not masked by a fallback.
    #[error("failed to store dream: {0}")]
    Storage(DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::interpretation::{derive_visual_data, fallback_interpretation};

    #[test]
    fn dream_serializes_with_snake_case_record_fields() {
        let interpretation = fallback_interpretation();
        let visual_data = derive_visual_data(&interpretation);
        let dream = Dream {
            id: DreamId::new(),
            dream_text: "I was flying over a city.".to_string(),
            audio_url: None,
            interpretation: Some(interpretation),
            visual_data: Some(visual_data),
            created_at: Timestamp::now(),
            session_id: SessionId::from("session-abc"),
        };

        let value = serde_json::to_value(&dream).unwrap();
        assert!(value.get("dream_text").is_some());
        assert!(value.get("created_at").is_some());
        assert!(value.get("session_id").is_some());
        // Interior payloads keep their own camelCase contract.
        assert!(value["interpretation"].get("lucidDreamPotential").is_some());
        assert!(value["visual_data"].get("themeDistribution").is_some());
    }

    #[test]
    fn dream_error_messages_are_generic() {
        assert_eq!(DreamError::EmptyDreamText.to_string(), "dream text is required");

        let err = DreamError::Storage(DomainError::new(ErrorCode::DatabaseError, "boom"));
        assert_eq!(err.to_string(), "failed to store dream: [DATABASE_ERROR] boom");
    }
}
