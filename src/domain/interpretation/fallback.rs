//! Static fallback interpretation.
//!
//! Substituted whenever the model path cannot produce a valid response:
//! missing credential, HTTP or network failure, timeout, or malformed JSON.
//! The content is fixed and generic regardless of the submitted dream text
//! (graceful degradation, a documented limitation). It satisfies the same
//! schema and cardinality contract as a model response, so downstream
//! consumers need no branching logic: exactly 3 themes, 5 symbols,
//! 3 emotions, and 3 insights.

use super::{DreamInterpretation, Emotion, Symbol, Theme};
use crate::domain::foundation::Intensity;

/// Returns the fixed, schema-valid fallback interpretation.
pub fn fallback_interpretation() -> DreamInterpretation {
    DreamInterpretation {
        summary: "Your dream contains rich symbolism and emotional depth. It reflects \
                  your subconscious processing daily experiences and deeper life themes."
            .to_string(),
        themes: vec![
            theme("Exploration", "A journey through the unknown", 75),
            theme("Emotion", "Deep feelings surfacing", 65),
            theme("Transformation", "Personal growth and change", 80),
        ],
        symbols: vec![
            symbol("Water", "Emotions and the unconscious", "nature", "#2196F3"),
            symbol("Path", "Life's journey and choices", "abstract", "#795548"),
            symbol("Light", "Clarity and awareness", "abstract", "#FFC107"),
            symbol("Animal", "Instincts and natural self", "nature", "#4CAF50"),
            symbol("House", "The self and personal space", "objects", "#FF5722"),
        ],
        emotions: vec![
            emotion("Wonder", 70, "#9C27B0"),
            emotion("Curiosity", 85, "#00BCD4"),
            emotion("Peace", 60, "#4CAF50"),
        ],
        insights: vec![
            "This dream reflects your current life transitions and emotional state".to_string(),
            "Recurring symbols suggest themes that deserve your attention".to_string(),
            "The dream's atmosphere reveals your subconscious feelings about current situations"
                .to_string(),
        ],
        lucid_dream_potential: Intensity::new(65),
    }
}

fn theme(name: &str, description: &str, intensity: u8) -> Theme {
    Theme {
        name: name.to_string(),
        description: description.to_string(),
        intensity: Intensity::new(intensity),
    }
}

fn symbol(name: &str, meaning: &str, category: &str, color: &str) -> Symbol {
    Symbol {
        name: name.to_string(),
        meaning: meaning.to_string(),
        category: category.to_string(),
        color: color.to_string(),
    }
}

fn emotion(name: &str, intensity: u8, color: &str) -> Emotion {
    Emotion {
        name: name.to_string(),
        intensity: Intensity::new(intensity),
        color: color.to_string(),
    }
}
