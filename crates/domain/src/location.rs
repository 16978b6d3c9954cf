//! Location entity.

use common::UnLocode;
use serde::{Deserialize, Serialize};

/// A named port or place, identified by its UN/LOCODE.
///
/// Identity is the UN/LOCODE; the name is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    unlocode: UnLocode,
    name: String,
}

impl Location {
    /// Creates a new location.
    pub fn new(unlocode: UnLocode, name: impl Into<String>) -> Self {
        Self {
            unlocode,
            name: name.into(),
        }
    }

    /// Returns the UN/LOCODE identifying this location.
    pub fn unlocode(&self) -> &UnLocode {
        &self.unlocode
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if both locations denote the same place.
    pub fn same_identity_as(&self, other: &Location) -> bool {
        self.unlocode == other.unlocode
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.unlocode)
    }
}
