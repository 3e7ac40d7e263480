//! Request/response DTOs for dream endpoints.
//!
//! Request and interpretation payloads use camelCase wire names; the
//! persisted dream record keeps its snake_case stored shape.

use serde::{Deserialize, Serialize};

use crate::domain::dream::Dream;
use crate::domain::interpretation::{DreamInterpretation, VisualData};

/// POST /api/dreams/interpret request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretDreamRequest {
    pub dream_text: String,
}

/// Interpretation response, identical for model and fallback paths.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretDreamResponse {
    pub interpretation: DreamInterpretation,
    pub visual_data: VisualData,
    pub used_fallback: bool,
}

/// POST /api/dreams request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDreamRequest {
    pub dream_text: String,
    #[serde(default)]
    pub audio_url: Option<String>,
    pub session_id: String,
}

/// Response for a stored submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDreamResponse {
    pub dream: Dream,
    pub used_fallback: bool,
}

/// Error response body: a single generic message, no internal detail.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interpret_request_uses_camel_case() {
        let request: InterpretDreamRequest =
            serde_json::from_value(json!({"dreamText": "I was flying"})).unwrap();
        assert_eq!(request.dream_text, "I was flying");
    }

    #[test]
    fn interpret_request_rejects_missing_text() {
        assert!(serde_json::from_value::<InterpretDreamRequest>(json!({})).is_err());
    }

    #[test]
    fn submit_request_audio_url_is_optional() {
        let request: SubmitDreamRequest = serde_json::from_value(json!({
            "dreamText": "I was flying",
            "sessionId": "session-1"
        }))
        .unwrap();
        assert!(request.audio_url.is_none());

        let request: SubmitDreamRequest = serde_json::from_value(json!({
            "dreamText": "I was flying",
            "audioUrl": "https://example.com/rec.webm",
            "sessionId": "session-1"
        }))
        .unwrap();
        assert_eq!(
            request.audio_url.as_deref(),
            Some("https://example.com/rec.webm")
        );
    }

    #[test]
    fn error_response_serializes_single_field() {
        let json = serde_json::to_value(ErrorResponse::new("Dream text is required")).unwrap();
        assert_eq!(json, json!({"error": "Dream text is required"}));
    }
}
