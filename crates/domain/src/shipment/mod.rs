//! Shipment aggregate and related value objects.

mod aggregate;
mod itinerary;
mod route;
mod status;

pub use aggregate::Shipment;
pub use itinerary::{Itinerary, Leg, VoyageNumber};
pub use route::RouteSpecification;
pub use status::RoutingStatus;

use common::UnLocode;
use thiserror::Error;

/// Errors that can occur when constructing shipment values.
#[derive(Debug, Error)]
pub enum ShipmentError {
    /// A route specification must connect two distinct locations.
    #[error("origin and destination must differ: {0}")]
    SameOriginAndDestination(UnLocode),

    /// An itinerary must contain at least one leg.
    #[error("an itinerary must contain at least one leg")]
    EmptyItinerary,
}
