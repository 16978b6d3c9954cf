//! Scoped unit of work over a shipment repository.

use domain::Shipment;

use crate::{Result, ShipmentRepository};

/// Buffers shipment writes and flushes them on [`UnitOfWork::commit`].
///
/// Workflow operations stage their mutated aggregate here after all
/// precondition checks have passed; until `commit` is called nothing reaches
/// the repository. Dropping the unit of work without committing — e.g. via a
/// `?` early return — discards every staged write, which gives each
/// operation its all-or-nothing boundary.
#[must_use = "staged writes are discarded unless commit() is called"]
pub struct UnitOfWork<'a, R: ShipmentRepository> {
    repository: &'a R,
    pending: Vec<Shipment>,
}

impl<'a, R: ShipmentRepository> UnitOfWork<'a, R> {
    /// Opens a unit of work over the given repository.
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            pending: Vec::new(),
        }
    }

    /// Stages a shipment to be persisted on commit.
    pub fn register(&mut self, shipment: Shipment) {
        self.pending.push(shipment);
    }

    /// Returns the number of staged writes.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Flushes all staged writes to the repository.
    ///
    /// Each flush is atomic per aggregate; the store call itself may fail,
    /// in which case the error propagates to the caller's operation boundary.
    pub async fn commit(self) -> Result<()> {
        for shipment in self.pending {
            self.repository.store(shipment).await?;
        }
        Ok(())
    }
}
