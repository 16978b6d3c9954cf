//! Itineraries: ordered sequences of transport legs.

use chrono::{DateTime, Utc};
use common::UnLocode;
use serde::{Deserialize, Serialize};

use super::ShipmentError;

/// Identifier of a voyage a leg travels on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoyageNumber(String);

impl VoyageNumber {
    /// Creates a new voyage number.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Returns the voyage number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoyageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoyageNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VoyageNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One transport movement: a voyage carrying the cargo from a load
/// location to an unload location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// The voyage this leg travels on.
    pub voyage_number: VoyageNumber,

    /// Where the cargo is loaded.
    pub load_location: UnLocode,

    /// Where the cargo is unloaded.
    pub unload_location: UnLocode,

    /// When the cargo is loaded.
    pub load_time: DateTime<Utc>,

    /// When the cargo is unloaded.
    pub unload_time: DateTime<Utc>,
}

impl Leg {
    /// Creates a new leg.
    pub fn new(
        voyage_number: impl Into<VoyageNumber>,
        load_location: UnLocode,
        unload_location: UnLocode,
        load_time: DateTime<Utc>,
        unload_time: DateTime<Utc>,
    ) -> Self {
        Self {
            voyage_number: voyage_number.into(),
            load_location,
            unload_location,
            load_time,
            unload_time,
        }
    }
}

/// An ordered sequence of legs moving a shipment from its first load
/// location to its final unload location.
///
/// Itineraries are immutable values produced by a routing engine (or
/// reconstructed from a prior proposal); they are never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Creates an itinerary from a non-empty list of legs.
    pub fn new(legs: Vec<Leg>) -> Result<Self, ShipmentError> {
        if legs.is_empty() {
            return Err(ShipmentError::EmptyItinerary);
        }
        Ok(Self { legs })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the location the itinerary departs from.
    pub fn initial_departure_location(&self) -> Option<&UnLocode> {
        self.legs.first().map(|leg| &leg.load_location)
    }

    /// Returns the location the itinerary finally arrives at.
    pub fn final_arrival_location(&self) -> Option<&UnLocode> {
        self.legs.last().map(|leg| &leg.unload_location)
    }

    /// Returns the time of final arrival.
    pub fn final_arrival_time(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(|leg| leg.unload_time)
    }
}
