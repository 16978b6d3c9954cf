use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a shipment.
///
/// Wraps a UUID to provide type safety and prevent mixing up
/// tracking identifiers with other UUID-based identifiers. The tracking
/// identifier is the sole key for both the shipment store and the
/// lock registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(Uuid);

impl TrackingId {
    /// Creates a new random tracking ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a tracking ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TrackingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TrackingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for TrackingId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<TrackingId> for Uuid {
    fn from(id: TrackingId) -> Self {
        id.0
    }
}

/// Error returned when a location code does not follow the UN/LOCODE format.
#[derive(Debug, Clone, Error)]
#[error("invalid UN/LOCODE: {0}")]
pub struct InvalidUnLocode(pub String);

/// United Nations location code.
///
/// Five characters: a two-letter country code followed by a three-character
/// place code (letters or digits). Codes are stored uppercased, e.g. `USNYC`
/// for New York or `SESTO` for Stockholm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

impl UnLocode {
    /// Parses and normalizes a UN/LOCODE, rejecting malformed input.
    pub fn new(code: impl Into<String>) -> Result<Self, InvalidUnLocode> {
        let code = code.into().to_ascii_uppercase();
        let bytes = code.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[..2].iter().all(|b| b.is_ascii_alphabetic())
            && bytes[2..].iter().all(|b| b.is_ascii_alphanumeric());

        if well_formed {
            Ok(Self(code))
        } else {
            Err(InvalidUnLocode(code))
        }
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UnLocode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UnLocode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for UnLocode {
    type Err = InvalidUnLocode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracking_id_new_creates_unique_ids() {
        let id1 = TrackingId::new();
        let id2 = TrackingId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn tracking_id_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = TrackingId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn tracking_id_serialization_roundtrip() {
        let id = TrackingId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TrackingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn unlocode_accepts_well_formed_codes() {
        assert_eq!(UnLocode::new("USNYC").unwrap().as_str(), "USNYC");
        assert_eq!(UnLocode::new("SESTO").unwrap().as_str(), "SESTO");
        // Digits are allowed in the place part.
        assert_eq!(UnLocode::new("US2NY").unwrap().as_str(), "US2NY");
    }

    #[test]
    fn unlocode_uppercases_input() {
        assert_eq!(UnLocode::new("deham").unwrap().as_str(), "DEHAM");
    }

    #[test]
    fn unlocode_rejects_malformed_codes() {
        assert!(UnLocode::new("").is_err());
        assert!(UnLocode::new("USNY").is_err());
        assert!(UnLocode::new("USNYCX").is_err());
        // Country part must be alphabetic.
        assert!(UnLocode::new("1SNYC").is_err());
        assert!(UnLocode::new("US NY").is_err());
    }

    #[test]
    fn unlocode_from_str() {
        let code: UnLocode = "cnhkg".parse().unwrap();
        assert_eq!(code.as_str(), "CNHKG");
        assert!("bogus!".parse::<UnLocode>().is_err());
    }

    #[test]
    fn unlocode_serialization_roundtrip() {
        let code = UnLocode::new("DEHAM").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"DEHAM\"");
        let deserialized: UnLocode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, deserialized);
    }
}
