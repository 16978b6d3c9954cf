//! Booking workflow service.

use chrono::{DateTime, Utc};
use common::{TrackingId, UnLocode};
use domain::{Itinerary, Location, RouteSpecification, Shipment};
use shipment_store::{LocationRepository, ShipmentRepository, UnitOfWork};

use crate::error::BookingError;
use crate::lock::TrackingLockRegistry;
use crate::routing::RoutingService;

/// Coordinates booking and re-routing of shipments.
///
/// Each mutating operation runs as one all-or-nothing unit of work: every
/// precondition is checked before the mutated aggregate is staged, the
/// single store write happens at commit, and any error before that point
/// discards the staged state. Reservation protocol: only
/// [`BookingService::load_shipment_for_routing`] acquires the per-shipment
/// lock; `assign_to_route` and `change_destination` consume it and release
/// it after a successful persist.
pub struct BookingService<S, L, R> {
    shipments: S,
    locations: L,
    routing: R,
    locks: TrackingLockRegistry,
}

impl<S, L, R> BookingService<S, L, R>
where
    S: ShipmentRepository,
    L: LocationRepository,
    R: RoutingService,
{
    /// Creates a new booking service over the given collaborators.
    pub fn new(shipments: S, locations: L, routing: R) -> Self {
        Self {
            shipments,
            locations,
            routing,
            locks: TrackingLockRegistry::new(),
        }
    }

    /// Returns the reservation registry.
    pub fn lock_registry(&self) -> &TrackingLockRegistry {
        &self.locks
    }

    /// Books a new shipment from `origin` to `destination` with the given
    /// arrival deadline, and returns its freshly generated tracking id.
    ///
    /// Both codes must resolve against the location directory. No lock is
    /// involved: the shipment does not exist until this operation commits,
    /// so no concurrent writer can observe it.
    #[tracing::instrument(skip(self))]
    pub async fn book_new_shipment(
        &self,
        origin: UnLocode,
        destination: UnLocode,
        arrival_deadline: DateTime<Utc>,
    ) -> Result<TrackingId, BookingError> {
        let origin = self.resolve_location(&origin).await?;
        let destination = self.resolve_location(&destination).await?;
        let specification = RouteSpecification::new(origin, destination, arrival_deadline)?;

        let shipment = Shipment::new(TrackingId::new(), specification);
        let tracking_id = shipment.tracking_id();

        let mut uow = UnitOfWork::new(&self.shipments);
        uow.register(shipment);
        uow.commit().await?;

        tracing::info!(%tracking_id, "booked new shipment");
        metrics::counter!("shipments_booked_total").increment(1);

        Ok(tracking_id)
    }

    /// Returns the routing engine's candidate itineraries for the
    /// shipment's current route specification, verbatim and in engine
    /// order.
    ///
    /// An unknown tracking id yields an empty list rather than an error;
    /// absence is a normal outcome for route exploration.
    #[tracing::instrument(skip(self))]
    pub async fn request_possible_routes(
        &self,
        tracking_id: TrackingId,
    ) -> Result<Vec<Itinerary>, BookingError> {
        let Some(shipment) = self.shipments.find(tracking_id).await? else {
            return Ok(Vec::new());
        };

        self.routing
            .fetch_routes_for_specification(shipment.route_specification())
            .await
    }

    /// Loads a shipment for a routing session, reserving it.
    ///
    /// This is the only operation that acquires the per-shipment lock, and
    /// it does so only when the shipment exists — a nonexistent tracking id
    /// is never left reserved.
    #[tracing::instrument(skip(self))]
    pub async fn load_shipment_for_routing(
        &self,
        tracking_id: TrackingId,
    ) -> Result<Option<Shipment>, BookingError> {
        let shipment = self.shipments.find(tracking_id).await?;
        if shipment.is_some() {
            self.locks.lock(tracking_id);
            tracing::debug!(%tracking_id, "reserved shipment for routing");
        }
        Ok(shipment)
    }

    /// Assigns the shipment to the given itinerary and releases its
    /// reservation.
    ///
    /// Requires an active reservation (see
    /// [`BookingService::load_shipment_for_routing`]). An itinerary that
    /// does not satisfy the current specification is still assigned; the
    /// shipment then reports `Misrouted`. On any failure the reservation
    /// stays in place and nothing is persisted.
    #[tracing::instrument(skip(self, itinerary))]
    pub async fn assign_to_route(
        &self,
        itinerary: Itinerary,
        tracking_id: TrackingId,
    ) -> Result<(), BookingError> {
        self.locks.assert_locked(tracking_id)?;

        let mut shipment = self
            .shipments
            .find(tracking_id)
            .await?
            .ok_or(BookingError::ShipmentNotFound(tracking_id))?;

        shipment.assign_to_route(itinerary);
        let routing_status = shipment.routing_status();

        let mut uow = UnitOfWork::new(&self.shipments);
        uow.register(shipment);
        uow.commit().await?;

        tracing::info!(%tracking_id, %routing_status, "assigned shipment to new route");
        metrics::counter!("routes_assigned_total").increment(1);

        self.locks.unlock(tracking_id);
        Ok(())
    }

    /// Changes the shipment's destination, deriving a new route
    /// specification with only the destination replaced, and releases its
    /// reservation.
    ///
    /// Requires an active reservation. A previously satisfying itinerary is
    /// kept and the shipment becomes `Misrouted` if it no longer fits the
    /// new specification.
    #[tracing::instrument(skip(self))]
    pub async fn change_destination(
        &self,
        tracking_id: TrackingId,
        destination: UnLocode,
    ) -> Result<(), BookingError> {
        self.locks.assert_locked(tracking_id)?;

        let mut shipment = self
            .shipments
            .find(tracking_id)
            .await?
            .ok_or(BookingError::ShipmentNotFound(tracking_id))?;

        let new_destination = self.resolve_location(&destination).await?;
        let specification = shipment
            .route_specification()
            .with_destination(new_destination)?;
        shipment.specify_new_route(specification);
        let routing_status = shipment.routing_status();

        let mut uow = UnitOfWork::new(&self.shipments);
        uow.register(shipment);
        uow.commit().await?;

        tracing::info!(%tracking_id, %destination, %routing_status, "changed shipment destination");
        metrics::counter!("destination_changes_total").increment(1);

        self.locks.unlock(tracking_id);
        Ok(())
    }

    async fn resolve_location(&self, unlocode: &UnLocode) -> Result<Location, BookingError> {
        self.locations
            .find(unlocode)
            .await?
            .ok_or_else(|| BookingError::UnknownLocation(unlocode.clone()))
    }
}
