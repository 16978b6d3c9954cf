//! Domain layer for the cargo booking system.
//!
//! This crate provides the core domain values and the shipment aggregate:
//! - Location entities resolved from UN/LOCODEs
//! - RouteSpecification and Itinerary value objects
//! - RoutingStatus derived purely from (specification, itinerary)
//! - Shipment aggregate with route assignment and re-specification
//!
//! The crate is pure: no I/O, no clocks, no persistence. Repositories and
//! workflow orchestration live in the `shipment-store` and `booking` crates.

pub mod location;
pub mod shipment;

pub use location::Location;
pub use shipment::{
    Itinerary, Leg, RouteSpecification, RoutingStatus, Shipment, ShipmentError, VoyageNumber,
};
