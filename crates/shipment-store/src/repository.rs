use async_trait::async_trait;
use common::{TrackingId, UnLocode};
use domain::{Location, Shipment};

use crate::Result;

/// Keyed storage for shipment aggregates.
///
/// The store is the single source of truth for shipment state and must
/// serialize writes per tracking id. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Looks up a shipment by tracking id.
    ///
    /// Absence is a normal outcome: returns `Ok(None)`, never an error.
    async fn find(&self, tracking_id: TrackingId) -> Result<Option<Shipment>>;

    /// Persists a shipment, overwriting any previous state under the same
    /// tracking id. Atomic per call.
    async fn store(&self, shipment: Shipment) -> Result<()>;

    /// Returns all stored shipments.
    async fn find_all(&self) -> Result<Vec<Shipment>>;
}

/// Directory of known locations, keyed by UN/LOCODE.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Resolves a UN/LOCODE to a location.
    ///
    /// Returns `Ok(None)` for codes the directory does not know.
    async fn find(&self, unlocode: &UnLocode) -> Result<Option<Location>>;

    /// Returns all known locations.
    async fn find_all(&self) -> Result<Vec<Location>>;
}
