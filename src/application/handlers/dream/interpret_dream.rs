//! InterpretDreamHandler - turns raw dream text into an interpretation.
//!
//! The single path through the core: validate input, ask the model, parse
//! the strict JSON contract, derive visual data. Every model-side failure
//! (no credential configured, HTTP error, network failure, timeout,
//! malformed JSON) is recovered locally by substituting the static fallback
//! and flagging `used_fallback`; only input validation errors escape to the
//! caller.

use std::sync::Arc;

use crate::domain::dream::DreamError;
use crate::domain::interpretation::{
    derive_visual_data, fallback_interpretation, DreamInterpretation, VisualData,
};
use crate::ports::{AiError, AiProvider, CompletionRequest, MessageRole};

use super::prompt::{build_user_prompt, SYSTEM_PROMPT};

/// Documented sampling temperature: balances variety and structure.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Bound on generated output size.
const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Command to interpret a dream text.
#[derive(Debug, Clone)]
pub struct InterpretDreamCommand {
    pub dream_text: String,
}

/// Result of an interpretation, synthetic or model-generated.
#[derive(Debug, Clone)]
pub struct InterpretationOutcome {
    pub interpretation: DreamInterpretation,
    pub visual_data: VisualData,
    /// True when the static fallback was substituted for the model path.
    pub used_fallback: bool,
}

/// Handler for dream interpretation.
///
/// Stateless between invocations; the only side effect is the outbound
/// model call. `provider` is `None` when no model credential is configured,
/// which routes every request to the fallback.
pub struct InterpretDreamHandler {
    provider: Option<Arc<dyn AiProvider>>,
    temperature: f32,
    max_tokens: u32,
}

impl InterpretDreamHandler {
    pub fn new(provider: Option<Arc<dyn AiProvider>>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Overrides the output size bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub async fn handle(
        &self,
        cmd: InterpretDreamCommand,
    ) -> Result<InterpretationOutcome, DreamError> {
        let dream_text = cmd.dream_text.trim();
        if dream_text.is_empty() {
            return Err(DreamError::EmptyDreamText);
        }

        let Some(provider) = &self.provider else {
            tracing::warn!("no model credential configured, using fallback interpretation");
            return Ok(fallback_outcome());
        };

        match self.interpret_with_model(provider.as_ref(), dream_text).await {
            Ok(interpretation) => {
                let visual_data = derive_visual_data(&interpretation);
                Ok(InterpretationOutcome {
                    interpretation,
                    visual_data,
                    used_fallback: false,
                })
            }
            Err(error) => {
                tracing::warn!(%error, "model interpretation failed, using fallback");
                Ok(fallback_outcome())
            }
        }
    }

    async fn interpret_with_model(
        &self,
        provider: &dyn AiProvider,
        dream_text: &str,
    ) -> Result<DreamInterpretation, AiError> {
        let request = CompletionRequest::new()
            .with_system_prompt(SYSTEM_PROMPT)
            .with_message(MessageRole::User, build_user_prompt(dream_text))
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let response = provider.complete(request).await?;

        let cleaned = strip_code_fences(&response.content);
        serde_json::from_str(&cleaned)
            .map_err(|e| AiError::parse(format!("invalid interpretation payload: {}", e)))
    }
}

fn fallback_outcome() -> InterpretationOutcome {
    let interpretation = fallback_interpretation();
    let visual_data = derive_visual_data(&interpretation);
    InterpretationOutcome {
        interpretation,
        visual_data,
        used_fallback: true,
    }
}

/// Strips common code-fence wrapping the model adds despite instructions.
fn strip_code_fences(content: &str) -> String {
    content
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}
