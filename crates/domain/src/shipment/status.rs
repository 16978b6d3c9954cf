//! Derived routing status.

use serde::{Deserialize, Serialize};

use super::{Itinerary, RouteSpecification};

/// Where a shipment stands with respect to routing.
///
/// The status is never stored; it is a pure function of the shipment's route
/// specification and assigned itinerary, so it cannot drift from the data it
/// is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoutingStatus {
    /// No itinerary has been assigned.
    #[default]
    NotRouted,

    /// The assigned itinerary satisfies the route specification.
    Routed,

    /// An itinerary is assigned but no longer satisfies the route
    /// specification (e.g. after a destination change).
    Misrouted,
}

impl RoutingStatus {
    /// Derives the status from a specification and an optional itinerary.
    pub fn derive(specification: &RouteSpecification, itinerary: Option<&Itinerary>) -> Self {
        match itinerary {
            None => RoutingStatus::NotRouted,
            Some(itinerary) if specification.is_satisfied_by(itinerary) => RoutingStatus::Routed,
            Some(_) => RoutingStatus::Misrouted,
        }
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingStatus::NotRouted => "NotRouted",
            RoutingStatus::Routed => "Routed",
            RoutingStatus::Misrouted => "Misrouted",
        }
    }
}

impl std::fmt::Display for RoutingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::shipment::Leg;
    use chrono::{DateTime, TimeZone, Utc};
    use common::UnLocode;

    fn location(code: &str, name: &str) -> Location {
        Location::new(UnLocode::new(code).unwrap(), name)
    }

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn spec() -> RouteSpecification {
        RouteSpecification::new(
            location("USNYC", "New York"),
            location("SESTO", "Stockholm"),
            date(20),
        )
        .unwrap()
    }

    fn itinerary(origin: &str, destination: &str) -> Itinerary {
        Itinerary::new(vec![Leg::new(
            "V100",
            UnLocode::new(origin).unwrap(),
            UnLocode::new(destination).unwrap(),
            date(1),
            date(10),
        )])
        .unwrap()
    }

    #[test]
    fn no_itinerary_means_not_routed() {
        assert_eq!(
            RoutingStatus::derive(&spec(), None),
            RoutingStatus::NotRouted
        );
    }

    #[test]
    fn satisfying_itinerary_means_routed() {
        let itinerary = itinerary("USNYC", "SESTO");
        assert_eq!(
            RoutingStatus::derive(&spec(), Some(&itinerary)),
            RoutingStatus::Routed
        );
    }

    #[test]
    fn non_satisfying_itinerary_means_misrouted() {
        let itinerary = itinerary("USNYC", "DEHAM");
        assert_eq!(
            RoutingStatus::derive(&spec(), Some(&itinerary)),
            RoutingStatus::Misrouted
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let spec = spec();
        let itinerary = itinerary("USNYC", "SESTO");
        let first = RoutingStatus::derive(&spec, Some(&itinerary));
        let second = RoutingStatus::derive(&spec, Some(&itinerary));
        assert_eq!(first, second);
    }

    #[test]
    fn display() {
        assert_eq!(RoutingStatus::NotRouted.to_string(), "NotRouted");
        assert_eq!(RoutingStatus::Routed.to_string(), "Routed");
        assert_eq!(RoutingStatus::Misrouted.to_string(), "Misrouted");
    }

    #[test]
    fn serialization_roundtrip() {
        let status = RoutingStatus::Misrouted;
        let json = serde_json::to_string(&status).unwrap();
        let deserialized: RoutingStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, deserialized);
    }
}
