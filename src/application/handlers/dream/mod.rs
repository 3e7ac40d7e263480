//! Dream command handlers: interpret and submit.

mod interpret_dream;
mod prompt;
mod submit_dream;

pub use interpret_dream::{
    InterpretDreamCommand, InterpretDreamHandler, InterpretationOutcome,
};
pub use prompt::{build_user_prompt, SYSTEM_PROMPT};
pub use submit_dream::{SubmitDreamCommand, SubmitDreamHandler, SubmitDreamResult};
