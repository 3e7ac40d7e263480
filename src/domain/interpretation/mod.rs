//! Dream interpretation payload types.
//!
//! `DreamInterpretation` is the structured analysis returned by the model.
//! It is treated as an untrusted payload: the model is prompted for 3-5
//! themes, 5-8 symbols, 3-5 emotions, and 3-5 insights, but the cardinality
//! contract is not mechanically enforced here. Numeric fields clamp into the
//! 0-100 range at the deserialization boundary via [`Intensity`].
//!
//! Wire field names follow the JSON contract (`lucidDreamPotential` etc.).

mod fallback;
mod visual;

pub use fallback::fallback_interpretation;
pub use visual::{
    derive_visual_data, derive_visual_data_with_rng, theme_color, EmotionBand, SymbolPoint,
    ThemeSlice, VisualData,
};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Intensity;

/// Structured analysis of a dream text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamInterpretation {
    /// Short summary of the dream's core meaning.
    pub summary: String,
    /// Dominant themes, strongest contract: 3-5 entries.
    pub themes: Vec<Theme>,
    /// Notable symbols, contract: 5-8 entries.
    pub symbols: Vec<Symbol>,
    /// Felt emotions, contract: 3-5 entries.
    pub emotions: Vec<Emotion>,
    /// Free-text insights, contract: 3-5 entries.
    pub insights: Vec<String>,
    /// Estimated self-awareness potential within the dream (0-100).
    pub lucid_dream_potential: Intensity,
}

/// A recurring or dominant theme in the dream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub intensity: Intensity,
}

/// A symbol appearing in the dream.
///
/// `category` is an open vocabulary ("nature", "people", "objects",
/// "abstract" by convention) and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub meaning: String,
    pub category: String,
    /// Model-supplied hex color for rendering.
    pub color: String,
}

/// An emotion present in the dream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub name: String,
    pub intensity: Intensity,
    /// Model-supplied hex color for rendering.
    pub color: String,
}
