//! SubmitDreamHandler - interpret a dream, then persist the record.
//!
//! The two network operations run sequentially: interpret (with its own
//! fallback policy), then a single insert. A persistence failure is
//! surfaced to the caller; it is never masked by the interpretation
//! fallback.

use std::sync::Arc;

use crate::domain::dream::{Dream, DreamDraft, DreamError};
use crate::domain::foundation::SessionId;
use crate::ports::DreamRepository;

use super::interpret_dream::{InterpretDreamCommand, InterpretDreamHandler};

/// Command to submit a dream for interpretation and storage.
#[derive(Debug, Clone)]
pub struct SubmitDreamCommand {
    pub dream_text: String,
    /// Opaque URL of a captured recording, if any.
    pub audio_url: Option<String>,
    pub session_id: SessionId,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitDreamResult {
    pub dream: Dream,
    pub used_fallback: bool,
}

/// Handler for dream submission.
pub struct SubmitDreamHandler {
    interpreter: Arc<InterpretDreamHandler>,
    repository: Arc<dyn DreamRepository>,
}

impl SubmitDreamHandler {
    pub fn new(
        interpreter: Arc<InterpretDreamHandler>,
        repository: Arc<dyn DreamRepository>,
    ) -> Self {
        Self {
            interpreter,
            repository,
        }
    }

    pub async fn handle(&self, cmd: SubmitDreamCommand) -> Result<SubmitDreamResult, DreamError> {
        let outcome = self
            .interpreter
            .handle(InterpretDreamCommand {
                dream_text: cmd.dream_text.clone(),
            })
            .await?;

        let draft = DreamDraft {
            dream_text: cmd.dream_text.trim().to_string(),
            audio_url: cmd.audio_url,
            interpretation: Some(outcome.interpretation),
            visual_data: Some(outcome.visual_data),
            session_id: cmd.session_id,
        };

        let dream = self
            .repository
            .insert(draft)
            .await
            .map_err(DreamError::Storage)?;

        tracing::info!(dream_id = %dream.id, used_fallback = outcome.used_fallback, "dream stored");

        Ok(SubmitDreamResult {
            dream,
            used_fallback: outcome.used_fallback,
        })
    }
}
