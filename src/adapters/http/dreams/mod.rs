//! HTTP adapter for dream endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, InterpretDreamRequest, InterpretDreamResponse, SubmitDreamRequest,
    SubmitDreamResponse,
};
pub use handlers::DreamHandlers;
pub use routes::dream_routes;
