//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a persisted dream record.
///
/// Assigned by the data store at insert time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DreamId(Uuid);

impl DreamId {
    /// Creates a new random DreamId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a DreamId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DreamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DreamId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Opaque client-generated session correlator.
///
/// Groups the dreams submitted from one browser session. This is not an
/// authentication identity; any string the client sends is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a SessionId from a client-supplied value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dream_ids_are_unique() {
        assert_ne!(DreamId::new(), DreamId::new());
    }

    #[test]
    fn dream_id_round_trips_through_string() {
        let id = DreamId::new();
        let parsed: DreamId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn dream_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<DreamId>().is_err());
    }

    #[test]
    fn session_id_is_opaque() {
        let id = SessionId::new("session-1703701134-abc123");
        assert_eq!(id.as_str(), "session-1703701134-abc123");
        assert_eq!(id.to_string(), "session-1703701134-abc123");
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::from("s-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"s-1\"");
    }
}
