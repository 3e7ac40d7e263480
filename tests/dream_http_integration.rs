//! Integration tests for the dream submission flow.
//!
//! These tests verify the wiring between the HTTP layer, the application
//! handlers, and the ports using test doubles:
//! 1. Request DTOs deserialize from the documented wire shapes
//! 2. Response payloads carry the documented keys
//! 3. The interpret-then-persist flow and its fallback policy hold end to end

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use dream_lens::adapters::ai::MockAiProvider;
use dream_lens::adapters::http::dreams::{InterpretDreamRequest, SubmitDreamRequest};
use dream_lens::application::handlers::dream::{
    InterpretDreamCommand, InterpretDreamHandler, SubmitDreamCommand, SubmitDreamHandler,
};
use dream_lens::domain::dream::{Dream, DreamDraft, DreamError};
use dream_lens::domain::foundation::{DomainError, DreamId, SessionId, Timestamp};
use dream_lens::domain::interpretation::fallback_interpretation;
use dream_lens::ports::{AiError, DreamRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory dream repository for testing
struct InMemoryDreamRepository {
    dreams: Mutex<Vec<Dream>>,
}

impl InMemoryDreamRepository {
    fn new() -> Self {
        Self {
            dreams: Mutex::new(Vec::new()),
        }
    }

    fn stored(&self) -> Vec<Dream> {
        self.dreams.lock().unwrap().clone()
    }
}

#[async_trait]
impl DreamRepository for InMemoryDreamRepository {
    async fn insert(&self, draft: DreamDraft) -> Result<Dream, DomainError> {
        let dream = Dream {
            id: DreamId::new(),
            dream_text: draft.dream_text,
            audio_url: draft.audio_url,
            interpretation: draft.interpretation,
            visual_data: draft.visual_data,
            created_at: Timestamp::now(),
            session_id: draft.session_id,
        };
        self.dreams.lock().unwrap().push(dream.clone());
        Ok(dream)
    }
}

/// Repository that always fails, for persistence-error paths
struct UnavailableDreamRepository;

#[async_trait]
impl DreamRepository for UnavailableDreamRepository {
    async fn insert(&self, _draft: DreamDraft) -> Result<Dream, DomainError> {
        Err(DomainError::database("store unavailable"))
    }
}

fn model_json() -> String {
    serde_json::to_string(&fallback_interpretation()).unwrap()
}

// =============================================================================
// Wire shapes
// =============================================================================

#[test]
fn interpret_request_deserializes_from_documented_shape() {
    let request: InterpretDreamRequest =
        serde_json::from_value(json!({"dreamText": "I was flying over a glass city"})).unwrap();
    assert_eq!(request.dream_text, "I was flying over a glass city");
}

#[test]
fn submit_request_deserializes_from_documented_shape() {
    let request: SubmitDreamRequest = serde_json::from_value(json!({
        "dreamText": "I was flying",
        "audioUrl": null,
        "sessionId": "session-1703701134-abc"
    }))
    .unwrap();
    assert_eq!(request.session_id, "session-1703701134-abc");
    assert!(request.audio_url.is_none());
}

#[tokio::test]
async fn interpret_response_carries_documented_keys() {
    let provider = MockAiProvider::new().with_response(model_json());
    let handler = InterpretDreamHandler::new(Some(Arc::new(provider)));

    let outcome = handler
        .handle(InterpretDreamCommand {
            dream_text: "a lighthouse in fog".to_string(),
        })
        .await
        .unwrap();

    let body = json!({
        "interpretation": outcome.interpretation,
        "visualData": outcome.visual_data,
        "usedFallback": outcome.used_fallback,
    });

    assert!(body["interpretation"]["lucidDreamPotential"].is_number());
    assert!(body["visualData"]["themeDistribution"].is_array());
    assert!(body["visualData"]["emotionalSpectrum"].is_array());
    assert!(body["visualData"]["symbolMap"].is_array());
    assert_eq!(body["usedFallback"], json!(false));
}

// =============================================================================
// End-to-end flow through the application wiring
// =============================================================================

#[tokio::test]
async fn submission_flow_stores_interpreted_dream() {
    let repository = Arc::new(InMemoryDreamRepository::new());
    let interpreter = Arc::new(InterpretDreamHandler::new(Some(Arc::new(
        MockAiProvider::new().with_response(model_json()),
    ))));
    let handler = SubmitDreamHandler::new(interpreter, repository.clone());

    let result = handler
        .handle(SubmitDreamCommand {
            dream_text: "I walked through a door into the sea".to_string(),
            audio_url: None,
            session_id: SessionId::from("session-xyz"),
        })
        .await
        .unwrap();

    assert!(!result.used_fallback);
    let stored = repository.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, result.dream.id);
    assert!(stored[0].interpretation.is_some());
    assert!(stored[0].visual_data.is_some());
}

#[tokio::test]
async fn model_outage_degrades_to_fallback_but_still_stores() {
    let repository = Arc::new(InMemoryDreamRepository::new());
    let interpreter = Arc::new(InterpretDreamHandler::new(Some(Arc::new(
        MockAiProvider::new().with_error(AiError::http(500, "upstream error")),
    ))));
    let handler = SubmitDreamHandler::new(interpreter, repository.clone());

    let result = handler
        .handle(SubmitDreamCommand {
            dream_text: "a repeating corridor".to_string(),
            audio_url: None,
            session_id: SessionId::from("session-xyz"),
        })
        .await
        .unwrap();

    assert!(result.used_fallback);
    let interpretation = result.dream.interpretation.unwrap();
    assert_eq!(interpretation.themes.len(), 3);
    assert_eq!(interpretation.symbols.len(), 5);
    assert_eq!(repository.stored().len(), 1);
}

#[tokio::test]
async fn persistence_outage_is_a_visible_error() {
    let interpreter = Arc::new(InterpretDreamHandler::new(Some(Arc::new(
        MockAiProvider::new().with_response(model_json()),
    ))));
    let handler = SubmitDreamHandler::new(interpreter, Arc::new(UnavailableDreamRepository));

    let err = handler
        .handle(SubmitDreamCommand {
            dream_text: "dream".to_string(),
            audio_url: None,
            session_id: SessionId::from("s"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DreamError::Storage(_)));
}

#[tokio::test]
async fn empty_submission_never_reaches_model_or_store() {
    let provider = MockAiProvider::new();
    let repository = Arc::new(InMemoryDreamRepository::new());
    let interpreter = Arc::new(InterpretDreamHandler::new(Some(Arc::new(provider.clone()))));
    let handler = SubmitDreamHandler::new(interpreter, repository.clone());

    let err = handler
        .handle(SubmitDreamCommand {
            dream_text: "   ".to_string(),
            audio_url: None,
            session_id: SessionId::from("s"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DreamError::EmptyDreamText));
    assert_eq!(provider.call_count(), 0);
    assert!(repository.stored().is_empty());
}
