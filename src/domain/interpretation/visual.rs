//! Visual data derivation.
//!
//! Turns a [`DreamInterpretation`] into chart-ready series. The theme and
//! emotion series are pure functions of the interpretation; only the symbol
//! scatter layout carries a random jitter component, so re-deriving for the
//! same interpretation yields identical distribution/spectrum values while
//! symbol coordinates may differ between calls.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::DreamInterpretation;
use crate::domain::foundation::Intensity;

/// Fixed palette keyed by canonical theme words.
///
/// Lookup is a case-insensitive substring match, so "Fearful Encounter"
/// resolves to the "fear" entry.
const THEME_PALETTE: &[(&str, &str)] = &[
    ("adventure", "#FF6B6B"),
    ("fear", "#4A148C"),
    ("love", "#EC407A"),
    ("transformation", "#26A69A"),
    ("conflict", "#D32F2F"),
    ("journey", "#FFA726"),
    ("mystery", "#5E35B1"),
    ("growth", "#66BB6A"),
    ("loss", "#607D8B"),
    ("discovery", "#42A5F5"),
];

/// Rendering-ready data derived from an interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualData {
    /// One entry per theme: intensity plus a palette- or hash-derived color.
    pub theme_distribution: Vec<ThemeSlice>,
    /// One entry per emotion: intensity plus the model-supplied color.
    pub emotional_spectrum: Vec<EmotionBand>,
    /// One scatter point per symbol on the normalized 0-100 plane.
    pub symbol_map: Vec<SymbolPoint>,
    /// Copy of the interpretation's lucid dream potential.
    pub lucid_score: Intensity,
}

/// A theme's share of the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSlice {
    pub name: String,
    pub value: Intensity,
    pub color: String,
}

/// An emotion's band in the spectrum chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionBand {
    pub emotion: String,
    pub value: Intensity,
    pub color: String,
}

/// A symbol marker on the scatter plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPoint {
    pub symbol: String,
    /// Marker size in [20, 50].
    pub size: f64,
    /// Horizontal position in [0, 100].
    pub x: f64,
    /// Vertical position in [0, 100].
    pub y: f64,
    pub color: String,
}

/// Derives visual data from an interpretation, jittering the symbol layout
/// with the thread-local RNG.
pub fn derive_visual_data(interpretation: &DreamInterpretation) -> VisualData {
    derive_visual_data_with_rng(interpretation, &mut rand::thread_rng())
}

/// Derives visual data using the supplied RNG for the symbol layout jitter.
///
/// Defined for any well-formed interpretation; zero-length sequences simply
/// produce empty series.
pub fn derive_visual_data_with_rng<R: Rng + ?Sized>(
    interpretation: &DreamInterpretation,
    rng: &mut R,
) -> VisualData {
    let theme_distribution = interpretation
        .themes
        .iter()
        .map(|theme| ThemeSlice {
            name: theme.name.clone(),
            value: theme.intensity,
            color: theme_color(&theme.name),
        })
        .collect();

    let emotional_spectrum = interpretation
        .emotions
        .iter()
        .map(|emotion| EmotionBand {
            emotion: emotion.name.clone(),
            value: emotion.intensity,
            color: emotion.color.clone(),
        })
        .collect();

    let symbol_count = interpretation.symbols.len();
    let symbol_map = interpretation
        .symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            // Evenly distributed base angle, jittered radius in [40, 60].
            let angle = index as f64 / symbol_count as f64 * std::f64::consts::TAU;
            let radius = 40.0 + rng.gen::<f64>() * 20.0;
            SymbolPoint {
                symbol: symbol.name.clone(),
                size: 20.0 + rng.gen::<f64>() * 30.0,
                x: (50.0 + angle.cos() * radius).clamp(0.0, 100.0),
                y: (50.0 + angle.sin() * radius).clamp(0.0, 100.0),
                color: symbol.color.clone(),
            }
        })
        .collect();

    VisualData {
        theme_distribution,
        emotional_spectrum,
        symbol_map,
        lucid_score: interpretation.lucid_dream_potential,
    }
}

/// Resolves a display color for a theme name.
///
/// Tries the fixed palette first (case-insensitive substring match); themes
/// outside the palette get a hash-derived HSL color that is stable across
/// repeated renders of the same name.
pub fn theme_color(theme_name: &str) -> String {
    let lower = theme_name.to_lowercase();
    for (key, color) in THEME_PALETTE {
        if lower.contains(key) {
            return (*color).to_string();
        }
    }

    let hue = hash_string(theme_name) % 360;
    format!("hsl({}, 70%, 60%)", hue)
}

// 32-bit string hash over UTF-16 code units (hash*31 + unit, wrapping).
fn hash_string(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
