//! Contract layer - types shared across the data layer
//!
//! Transport-agnostic entity metadata and the storage error type.

pub mod error;
pub mod model;

pub use error::{StoreError, StoreResult, FIELD_VIOLATION_PREFIX};
pub use model::{EntityKind, IdPolicy, Inclusion, RelationKind};
