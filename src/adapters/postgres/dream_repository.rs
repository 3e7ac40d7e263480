//! PostgreSQL implementation of DreamRepository.
//!
//! Inserts dream records into the `dreams` table; `id` and `created_at` are
//! assigned by the store (see `migrations/`). Interpretation and visual data
//! are stored as jsonb snapshots of the wire payloads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::dream::{Dream, DreamDraft};
use crate::domain::foundation::{DomainError, DreamId, Timestamp};
use crate::ports::DreamRepository;

/// PostgreSQL implementation of DreamRepository.
#[derive(Clone)]
pub struct PostgresDreamRepository {
    pool: PgPool,
}

impl PostgresDreamRepository {
    /// Creates a new PostgresDreamRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DreamRepository for PostgresDreamRepository {
    async fn insert(&self, draft: DreamDraft) -> Result<Dream, DomainError> {
        let interpretation_json = draft
            .interpretation
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                DomainError::internal(format!("Failed to serialize interpretation: {}", e))
            })?;

        let visual_data_json = draft
            .visual_data
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| {
                DomainError::internal(format!("Failed to serialize visual data: {}", e))
            })?;

        let row = sqlx::query(
            r#"
            INSERT INTO dreams (
                dream_text, audio_url, interpretation, visual_data, session_id
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id, created_at
            "#,
        )
        .bind(&draft.dream_text)
        .bind(&draft.audio_url)
        .bind(&interpretation_json)
        .bind(&visual_data_json)
        .bind(draft.session_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert dream: {}", e)))?;

        let id: Uuid = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Missing id column: {}", e)))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::database(format!("Missing created_at column: {}", e)))?;

        Ok(Dream {
            id: DreamId::from_uuid(id),
            dream_text: draft.dream_text,
            audio_url: draft.audio_url,
            interpretation: draft.interpretation,
            visual_data: draft.visual_data,
            created_at: Timestamp::from_datetime(created_at),
            session_id: draft.session_id,
        })
    }
}
