//! Route specifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::location::Location;

use super::{Itinerary, ShipmentError};

/// Where a shipment travels from and to, and when it must arrive.
///
/// Immutable value object. Changing the destination derives a fresh
/// specification; the original is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpecification {
    origin: Location,
    destination: Location,
    arrival_deadline: DateTime<Utc>,
}

impl RouteSpecification {
    /// Creates a new route specification.
    ///
    /// Origin and destination must denote different places.
    pub fn new(
        origin: Location,
        destination: Location,
        arrival_deadline: DateTime<Utc>,
    ) -> Result<Self, ShipmentError> {
        if origin.same_identity_as(&destination) {
            return Err(ShipmentError::SameOriginAndDestination(
                origin.unlocode().clone(),
            ));
        }

        Ok(Self {
            origin,
            destination,
            arrival_deadline,
        })
    }

    /// Returns the origin location.
    pub fn origin(&self) -> &Location {
        &self.origin
    }

    /// Returns the destination location.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Returns the arrival deadline.
    pub fn arrival_deadline(&self) -> DateTime<Utc> {
        self.arrival_deadline
    }

    /// Derives a new specification with only the destination replaced.
    pub fn with_destination(&self, destination: Location) -> Result<Self, ShipmentError> {
        Self::new(self.origin.clone(), destination, self.arrival_deadline)
    }

    /// Returns true if the itinerary fulfills this specification: it departs
    /// at the origin, arrives at the destination, and arrives before the
    /// deadline.
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        itinerary.initial_departure_location() == Some(self.origin.unlocode())
            && itinerary.final_arrival_location() == Some(self.destination.unlocode())
            && itinerary
                .final_arrival_time()
                .is_some_and(|arrival| arrival < self.arrival_deadline)
    }
}
