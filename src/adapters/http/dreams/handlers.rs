//! HTTP handlers for dream endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::dream::{
    InterpretDreamCommand, InterpretDreamHandler, SubmitDreamCommand, SubmitDreamHandler,
};
use crate::domain::dream::DreamError;
use crate::domain::foundation::SessionId;

use super::dto::{
    ErrorResponse, InterpretDreamRequest, InterpretDreamResponse, SubmitDreamRequest,
    SubmitDreamResponse,
};

/// Shared handler state for the dream routes.
#[derive(Clone)]
pub struct DreamHandlers {
    interpret_handler: Arc<InterpretDreamHandler>,
    submit_handler: Arc<SubmitDreamHandler>,
}

impl DreamHandlers {
    pub fn new(
        interpret_handler: Arc<InterpretDreamHandler>,
        submit_handler: Arc<SubmitDreamHandler>,
    ) -> Self {
        Self {
            interpret_handler,
            submit_handler,
        }
    }
}

/// POST /api/dreams/interpret - Interpret a dream text
///
/// Returns 200 for both model-generated and fallback interpretations; the
/// `usedFallback` flag is the only distinction. 400 on empty input.
pub async fn interpret_dream(
    State(handlers): State<DreamHandlers>,
    Json(req): Json<InterpretDreamRequest>,
) -> Response {
    let cmd = InterpretDreamCommand {
        dream_text: req.dream_text,
    };

    match handlers.interpret_handler.handle(cmd).await {
        Ok(outcome) => {
            let response = InterpretDreamResponse {
                interpretation: outcome.interpretation,
                visual_data: outcome.visual_data,
                used_fallback: outcome.used_fallback,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_dream_error(e),
    }
}

/// POST /api/dreams - Interpret and store a dream
pub async fn submit_dream(
    State(handlers): State<DreamHandlers>,
    Json(req): Json<SubmitDreamRequest>,
) -> Response {
    let cmd = SubmitDreamCommand {
        dream_text: req.dream_text,
        audio_url: req.audio_url,
        session_id: SessionId::from(req.session_id),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitDreamResponse {
                dream: result.dream,
                used_fallback: result.used_fallback,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_dream_error(e),
    }
}

/// Maps dream errors onto the wire contract. Messages stay generic; no
/// internal detail is leaked to the client.
fn handle_dream_error(error: DreamError) -> Response {
    match error {
        DreamError::EmptyDreamText => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Dream text is required")),
        )
            .into_response(),
        DreamError::Storage(e) => {
            tracing::error!(%e, "failed to store dream");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to store dream")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainError;

    #[test]
    fn empty_text_maps_to_bad_request() {
        let response = handle_dream_error(DreamError::EmptyDreamText);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_internal_error() {
        let response =
            handle_dream_error(DreamError::Storage(DomainError::database("unreachable")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
