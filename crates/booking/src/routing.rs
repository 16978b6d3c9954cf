//! Routing engine boundary and in-memory double.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Duration;
use common::UnLocode;
use domain::{Itinerary, Leg, RouteSpecification};

use crate::error::BookingError;

/// Computes candidate itineraries for a route specification.
///
/// Implementations must behave as a pure function of the specification and
/// return candidates in ranked order; the booking workflow passes the result
/// through verbatim without re-ordering.
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Returns a finite, possibly empty list of candidate itineraries for
    /// the specification.
    async fn fetch_routes_for_specification(
        &self,
        specification: &RouteSpecification,
    ) -> Result<Vec<Itinerary>, BookingError>;
}

#[derive(Debug, Default)]
struct RoutingState {
    routes: Vec<Itinerary>,
    fail_on_fetch: bool,
}

/// In-memory routing service for tests and the demo server.
///
/// Canned candidates are returned verbatim in configuration order. With no
/// canned routes, a single direct itinerary is synthesized from the
/// specification so the service always has something to propose; the
/// synthesized times are derived from the arrival deadline, keeping the
/// result a pure function of the specification.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoutingService {
    state: Arc<RwLock<RoutingState>>,
}

impl InMemoryRoutingService {
    /// Creates a routing service that synthesizes direct itineraries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a routing service that returns the given candidates verbatim.
    pub fn with_routes(routes: Vec<Itinerary>) -> Self {
        Self {
            state: Arc::new(RwLock::new(RoutingState {
                routes,
                fail_on_fetch: false,
            })),
        }
    }

    /// Configures the service to fail every subsequent fetch, simulating a
    /// routing backend outage.
    pub fn set_fail_on_fetch(&self, fail: bool) {
        self.state.write().unwrap().fail_on_fetch = fail;
    }
}

fn direct_itinerary(specification: &RouteSpecification) -> Itinerary {
    let origin: &UnLocode = specification.origin().unlocode();
    let destination = specification.destination().unlocode();
    let deadline = specification.arrival_deadline();

    let leg = Leg::new(
        format!("DIRECT-{origin}-{destination}"),
        origin.clone(),
        destination.clone(),
        deadline - Duration::days(7),
        deadline - Duration::days(1),
    );

    // One leg is always present, so construction cannot fail.
    Itinerary::new(vec![leg]).expect("direct itinerary has one leg")
}

#[async_trait]
impl RoutingService for InMemoryRoutingService {
    async fn fetch_routes_for_specification(
        &self,
        specification: &RouteSpecification,
    ) -> Result<Vec<Itinerary>, BookingError> {
        let state = self.state.read().unwrap();

        if state.fail_on_fetch {
            return Err(BookingError::RoutingUnavailable(
                "route computation backend is down".to_string(),
            ));
        }

        if state.routes.is_empty() {
            return Ok(vec![direct_itinerary(specification)]);
        }

        Ok(state.routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use domain::Location;

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

    fn canned_itinerary(destination: &str) -> Itinerary {
        Itinerary::new(vec![Leg::new(
            "V100",
            UnLocode::new("USNYC").unwrap(),
            UnLocode::new(destination).unwrap(),
            date(1),
            date(10),
        )])
        .unwrap()
    }

    #[tokio::test]
    async fn synthesizes_direct_itinerary_when_unconfigured() {
        let service = InMemoryRoutingService::new();

        let routes = service.fetch_routes_for_specification(&spec()).await.unwrap();

        assert_eq!(routes.len(), 1);
        assert!(spec().is_satisfied_by(&routes[0]));
    }

    #[tokio::test]
    async fn synthesized_itinerary_is_deterministic() {
        let service = InMemoryRoutingService::new();

        let first = service.fetch_routes_for_specification(&spec()).await.unwrap();
        let second = service.fetch_routes_for_specification(&spec()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn canned_routes_are_returned_verbatim_in_order() {
        let routes = vec![canned_itinerary("SESTO"), canned_itinerary("DEHAM")];
        let service = InMemoryRoutingService::with_routes(routes.clone());

        let fetched = service.fetch_routes_for_specification(&spec()).await.unwrap();

        // Order preserved, non-satisfying candidates included.
        assert_eq!(fetched, routes);
    }

    #[tokio::test]
    async fn fail_on_fetch_reports_unavailable() {
        let service = InMemoryRoutingService::new();
        service.set_fail_on_fetch(true);

        let result = service.fetch_routes_for_specification(&spec()).await;
        assert!(matches!(result, Err(BookingError::RoutingUnavailable(_))));
    }
}
