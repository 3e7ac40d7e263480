//! Ports - interfaces between the application core and external collaborators.

mod ai_provider;
mod dream_repository;

pub use ai_provider::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, TokenUsage,
};
pub use dream_repository::DreamRepository;
