//! Shipment aggregate root.

use common::TrackingId;
use serde::{Deserialize, Serialize};

use super::{Itinerary, RouteSpecification, RoutingStatus};

/// A booked shipment: a route specification and, once routed, an itinerary.
///
/// The aggregate holds no stored status field; routing status is always
/// recomputed from the specification and the itinerary. Mutation goes
/// through [`Shipment::assign_to_route`] and [`Shipment::specify_new_route`]
/// only, so the two fields can never be observed in a half-updated state
/// once the aggregate is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    tracking_id: TrackingId,
    route_specification: RouteSpecification,
    itinerary: Option<Itinerary>,
}

impl Shipment {
    /// Creates a newly booked, not yet routed shipment.
    pub fn new(tracking_id: TrackingId, route_specification: RouteSpecification) -> Self {
        Self {
            tracking_id,
            route_specification,
            itinerary: None,
        }
    }

    /// Returns the tracking identifier.
    pub fn tracking_id(&self) -> TrackingId {
        self.tracking_id
    }

    /// Returns the current route specification.
    pub fn route_specification(&self) -> &RouteSpecification {
        &self.route_specification
    }

    /// Returns the assigned itinerary, if any.
    pub fn itinerary(&self) -> Option<&Itinerary> {
        self.itinerary.as_ref()
    }

    /// Returns the routing status derived from the specification and the
    /// itinerary.
    pub fn routing_status(&self) -> RoutingStatus {
        RoutingStatus::derive(&self.route_specification, self.itinerary.as_ref())
    }

    /// Assigns the shipment to the given itinerary, replacing any previous
    /// one.
    ///
    /// An itinerary that does not satisfy the current specification is
    /// accepted; the shipment then reports [`RoutingStatus::Misrouted`].
    pub fn assign_to_route(&mut self, itinerary: Itinerary) {
        self.itinerary = Some(itinerary);
    }

    /// Replaces the route specification, keeping the itinerary.
    ///
    /// A previously satisfying itinerary may stop satisfying the new
    /// specification, in which case the derived status becomes
    /// [`RoutingStatus::Misrouted`].
    pub fn specify_new_route(&mut self, route_specification: RouteSpecification) {
        self.route_specification = route_specification;
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

    fn new_york_to_stockholm() -> RouteSpecification {
        RouteSpecification::new(
            location("USNYC", "New York"),
            location("SESTO", "Stockholm"),
            date(20),
        )
        .unwrap()
    }

    fn direct_itinerary(origin: &str, destination: &str) -> Itinerary {
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
    fn new_shipment_is_not_routed() {
        let shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());
        assert_eq!(shipment.routing_status(), RoutingStatus::NotRouted);
        assert!(shipment.itinerary().is_none());
    }

    #[test]
    fn assigning_satisfying_itinerary_routes_the_shipment() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());
        let itinerary = direct_itinerary("USNYC", "SESTO");

        shipment.assign_to_route(itinerary.clone());

        assert_eq!(shipment.routing_status(), RoutingStatus::Routed);
        assert_eq!(shipment.itinerary(), Some(&itinerary));
    }

    #[test]
    fn assigning_non_satisfying_itinerary_is_accepted_as_misrouted() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());

        shipment.assign_to_route(direct_itinerary("USNYC", "DEHAM"));

        assert_eq!(shipment.routing_status(), RoutingStatus::Misrouted);
    }

    #[test]
    fn reassignment_replaces_the_itinerary() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());
        shipment.assign_to_route(direct_itinerary("USNYC", "DEHAM"));
        shipment.assign_to_route(direct_itinerary("USNYC", "SESTO"));

        assert_eq!(shipment.routing_status(), RoutingStatus::Routed);
    }

    #[test]
    fn destination_change_makes_routed_shipment_misrouted() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());
        let itinerary = direct_itinerary("USNYC", "SESTO");
        shipment.assign_to_route(itinerary.clone());
        assert_eq!(shipment.routing_status(), RoutingStatus::Routed);

        let new_spec = shipment
            .route_specification()
            .with_destination(location("DEHAM", "Hamburg"))
            .unwrap();
        shipment.specify_new_route(new_spec);

        assert_eq!(shipment.routing_status(), RoutingStatus::Misrouted);
        // The itinerary itself is untouched.
        assert_eq!(shipment.itinerary(), Some(&itinerary));
    }

    #[test]
    fn destination_change_on_unrouted_shipment_stays_not_routed() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());

        let new_spec = shipment
            .route_specification()
            .with_destination(location("DEHAM", "Hamburg"))
            .unwrap();
        shipment.specify_new_route(new_spec);

        assert_eq!(shipment.routing_status(), RoutingStatus::NotRouted);
    }

    #[test]
    fn serialization_roundtrip() {
        let mut shipment = Shipment::new(TrackingId::new(), new_york_to_stockholm());
        shipment.assign_to_route(direct_itinerary("USNYC", "SESTO"));

        let json = serde_json::to_string(&shipment).unwrap();
        let deserialized: Shipment = serde_json::from_str(&json).unwrap();
        assert_eq!(shipment, deserialized);
    }
}
