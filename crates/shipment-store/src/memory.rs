use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{TrackingId, UnLocode};
use domain::{Location, Shipment};
use tokio::sync::RwLock;

use crate::{LocationRepository, Result, ShipmentRepository, StoreError};

#[derive(Debug, Default)]
struct ShipmentStoreState {
    shipments: HashMap<TrackingId, Shipment>,
    fail_on_store: bool,
}

/// In-memory shipment store for tests and the demo server.
///
/// Provides the same interface a durable implementation would; each `store`
/// call replaces the whole aggregate atomically.
#[derive(Clone, Default)]
pub struct InMemoryShipmentStore {
    state: Arc<RwLock<ShipmentStoreState>>,
}

impl InMemoryShipmentStore {
    /// Creates a new empty in-memory shipment store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored shipments.
    pub async fn shipment_count(&self) -> usize {
        self.state.read().await.shipments.len()
    }

    /// Removes all stored shipments.
    pub async fn clear(&self) {
        self.state.write().await.shipments.clear();
    }

    /// Configures the store to fail every subsequent `store` call,
    /// simulating a transient outage.
    pub async fn set_fail_on_store(&self, fail: bool) {
        self.state.write().await.fail_on_store = fail;
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentStore {
    async fn find(&self, tracking_id: TrackingId) -> Result<Option<Shipment>> {
        let state = self.state.read().await;
        Ok(state.shipments.get(&tracking_id).cloned())
    }

    async fn store(&self, shipment: Shipment) -> Result<()> {
        let mut state = self.state.write().await;

        if state.fail_on_store {
            return Err(StoreError::Unavailable(
                "shipment store write rejected".to_string(),
            ));
        }

        let tracking_id = shipment.tracking_id();
        state.shipments.insert(tracking_id, shipment);
        tracing::debug!(%tracking_id, "stored shipment");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Shipment>> {
        let state = self.state.read().await;
        let mut shipments: Vec<_> = state.shipments.values().cloned().collect();
        shipments.sort_by_key(|s| s.tracking_id().as_uuid());
        Ok(shipments)
    }
}

/// In-memory location directory.
#[derive(Clone, Default)]
pub struct InMemoryLocationStore {
    locations: Arc<RwLock<HashMap<UnLocode, Location>>>,
}

impl InMemoryLocationStore {
    /// Creates a new empty location store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a location store seeded with the given locations.
    pub fn with_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        let map = locations
            .into_iter()
            .map(|location| (location.unlocode().clone(), location))
            .collect();
        Self {
            locations: Arc::new(RwLock::new(map)),
        }
    }

    /// Creates a location store seeded with a standard set of ports.
    pub fn sample() -> Self {
        const PORTS: &[(&str, &str)] = &[
            ("AUMEL", "Melbourne"),
            ("CNHKG", "Hong Kong"),
            ("CNSHA", "Shanghai"),
            ("DEHAM", "Hamburg"),
            ("FIHEL", "Helsinki"),
            ("JPTYO", "Tokyo"),
            ("NLRTM", "Rotterdam"),
            ("SEGOT", "Gothenburg"),
            ("SESTO", "Stockholm"),
            ("USCHI", "Chicago"),
            ("USNYC", "New York"),
        ];

        Self::with_locations(PORTS.iter().map(|(code, name)| {
            let unlocode = UnLocode::new(*code).expect("seed UN/LOCODE is well-formed");
            Location::new(unlocode, *name)
        }))
    }

    /// Adds a location to the directory.
    pub async fn add(&self, location: Location) {
        self.locations
            .write()
            .await
            .insert(location.unlocode().clone(), location);
    }

    /// Returns the number of known locations.
    pub async fn location_count(&self) -> usize {
        self.locations.read().await.len()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationStore {
    async fn find(&self, unlocode: &UnLocode) -> Result<Option<Location>> {
        let locations = self.locations.read().await;
        Ok(locations.get(unlocode).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Location>> {
        let locations = self.locations.read().await;
        let mut all: Vec<_> = locations.values().cloned().collect();
        all.sort_by(|a, b| a.unlocode().as_str().cmp(b.unlocode().as_str()));
        Ok(all)
    }
}
