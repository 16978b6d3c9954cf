pub mod types;

pub use types::{InvalidUnLocode, TrackingId, UnLocode};
