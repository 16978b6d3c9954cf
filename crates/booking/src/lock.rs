//! Per-shipment routing reservation registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use common::TrackingId;
use thiserror::Error;

/// Error returned when a mutation is attempted without a prior reservation.
#[derive(Debug, Clone, Error)]
#[error("no active routing reservation for shipment {0}")]
pub struct NotLockedError(pub TrackingId);

/// Tracks which shipments currently have an in-flight routing session.
///
/// The registry is a workflow gate, not a mutex: it encodes the rule that a
/// caller must load a shipment for routing (which reserves it) before
/// committing an itinerary or destination change. `assert_locked` fails fast
/// instead of blocking, and no owner is recorded — two callers that both
/// observe an earlier reservation are not serialized against each other.
/// The store remains responsible for write atomicity.
///
/// Entries are created lazily on first lock and persist for the life of the
/// process, reverting to unlocked after release. State is process-local and
/// intentionally not durable: reservations only serialize in-flight
/// operations.
#[derive(Debug, Clone, Default)]
pub struct TrackingLockRegistry {
    flags: Arc<RwLock<HashMap<TrackingId, bool>>>,
}

impl TrackingLockRegistry {
    /// Creates a new registry with no reservations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the tracking id as reserved. Idempotent; re-locking an already
    /// reserved id is not an error.
    pub fn lock(&self, tracking_id: TrackingId) {
        self.flags.write().unwrap().insert(tracking_id, true);
    }

    /// Succeeds if the tracking id is currently reserved, otherwise fails
    /// with [`NotLockedError`]. Never blocks.
    pub fn assert_locked(&self, tracking_id: TrackingId) -> Result<(), NotLockedError> {
        if self.is_locked(tracking_id) {
            Ok(())
        } else {
            Err(NotLockedError(tracking_id))
        }
    }

    /// Releases the reservation unconditionally. Unlocking an id that was
    /// never reserved is not an error.
    pub fn unlock(&self, tracking_id: TrackingId) {
        if let Some(flag) = self.flags.write().unwrap().get_mut(&tracking_id) {
            *flag = false;
        }
    }

    /// Returns true if the tracking id is currently reserved.
    pub fn is_locked(&self, tracking_id: TrackingId) -> bool {
        self.flags
            .read()
            .unwrap()
            .get(&tracking_id)
            .copied()
            .unwrap_or(false)
    }
}
