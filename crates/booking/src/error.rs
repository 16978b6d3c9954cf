//! Booking workflow error types.

use common::{TrackingId, UnLocode};
use domain::ShipmentError;
use shipment_store::StoreError;
use thiserror::Error;

use crate::lock::NotLockedError;

/// Errors that can occur during booking workflow operations.
///
/// All precondition failures are detected before any mutation is staged, so
/// an error never leaves a partially updated shipment behind.
#[derive(Debug, Error)]
pub enum BookingError {
    /// A location code did not resolve against the location directory.
    /// Client input error; not retried.
    #[error("unknown location: {0}")]
    UnknownLocation(UnLocode),

    /// A mutating operation targeted a tracking id with no stored shipment.
    #[error("shipment not found: {0}")]
    ShipmentNotFound(TrackingId),

    /// A mutating operation was attempted without a prior routing
    /// reservation. Protocol violation by the caller; not retried.
    #[error(transparent)]
    NotLocked(#[from] NotLockedError),

    /// A shipment value violated a construction rule.
    #[error("shipment error: {0}")]
    Shipment(#[from] ShipmentError),

    /// The shipment or location store failed. Transient; the operation's
    /// unit of work is discarded.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The routing engine failed to produce candidates. Transient.
    #[error("routing service unavailable: {0}")]
    RoutingUnavailable(String),
}
