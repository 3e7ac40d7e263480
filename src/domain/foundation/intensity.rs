//! Intensity value object (0-100 scale).
//!
//! Model responses are an untrusted payload: the prompt asks for 0-100
//! integers but nothing guarantees adherence, so deserialization clamps any
//! numeric input into range instead of failing outright.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Intensity(u8);

impl Intensity {
    /// Zero intensity.
    pub const ZERO: Self = Self(0);

    /// Maximum intensity.
    pub const MAX: Self = Self(100);

    /// Creates a new Intensity, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates an Intensity, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "intensity",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates an Intensity from an arbitrary float, clamping into range.
    ///
    /// Non-finite input maps to zero.
    pub fn from_clamped(raw: f64) -> Self {
        if !raw.is_finite() {
            return Self::ZERO;
        }
        Self(raw.round().clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Clamping deserializer: accepts any JSON number and folds it into 0-100.
impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Ok(Self::from_clamped(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn intensity_new_accepts_valid_values() {
        assert_eq!(Intensity::new(0).value(), 0);
        assert_eq!(Intensity::new(50).value(), 50);
        assert_eq!(Intensity::new(100).value(), 100);
    }

    #[test]
    fn intensity_new_clamps_to_100() {
        assert_eq!(Intensity::new(101).value(), 100);
        assert_eq!(Intensity::new(255).value(), 100);
    }

    #[test]
    fn intensity_try_new_rejects_over_100() {
        assert!(Intensity::try_new(100).is_ok());
        let result = Intensity::try_new(101);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "intensity");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn intensity_from_clamped_folds_into_range() {
        assert_eq!(Intensity::from_clamped(-5.0).value(), 0);
        assert_eq!(Intensity::from_clamped(64.7).value(), 65);
        assert_eq!(Intensity::from_clamped(350.0).value(), 100);
        assert_eq!(Intensity::from_clamped(f64::NAN).value(), 0);
        assert_eq!(Intensity::from_clamped(f64::INFINITY).value(), 0);
    }

    #[test]
    fn intensity_deserializes_with_clamping() {
        let within: Intensity = serde_json::from_str("75").unwrap();
        assert_eq!(within.value(), 75);

        let over: Intensity = serde_json::from_str("150").unwrap();
        assert_eq!(over.value(), 100);

        let negative: Intensity = serde_json::from_str("-20").unwrap();
        assert_eq!(negative.value(), 0);

        let fractional: Intensity = serde_json::from_str("49.6").unwrap();
        assert_eq!(fractional.value(), 50);
    }

    #[test]
    fn intensity_serializes_as_bare_number() {
        let json = serde_json::to_string(&Intensity::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn intensity_as_fraction_converts_correctly() {
        assert!((Intensity::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Intensity::MAX.as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn from_clamped_always_lands_in_range(raw in proptest::num::f64::ANY) {
            let value = Intensity::from_clamped(raw).value();
            prop_assert!(value <= 100);
        }
    }
}
