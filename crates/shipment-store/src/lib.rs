//! Persistence boundary for the cargo booking system.
//!
//! Exposes the repository traits the booking workflow is written against,
//! in-memory implementations backing tests and the demo server, and the
//! scoped [`UnitOfWork`] that buffers writes until commit.

pub mod error;
pub mod memory;
pub mod repository;
pub mod uow;

pub use error::{Result, StoreError};
pub use memory::{InMemoryLocationStore, InMemoryShipmentStore};
pub use repository::{LocationRepository, ShipmentRepository};
pub use uow::UnitOfWork;
