//! Booking workflow for the cargo booking system.
//!
//! This crate owns the concurrency-controlled route-assignment workflow:
//! - [`TrackingLockRegistry`] — the per-tracking-id reservation gate
//! - [`BookingService`] — book, propose routes, assign route, change
//!   destination, and the load-for-routing reservation step
//! - [`RoutingService`] — the routing engine boundary, with an in-memory
//!   double for tests and demos

pub mod error;
pub mod lock;
pub mod routing;
pub mod service;

pub use error::BookingError;
pub use lock::{NotLockedError, TrackingLockRegistry};
pub use routing::{InMemoryRoutingService, RoutingService};
pub use service::BookingService;
