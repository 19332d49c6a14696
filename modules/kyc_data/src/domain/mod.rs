//! Domain layer - identity & audit wrapper, relationship topology, field rules

pub mod audit;
pub mod repository;
pub mod topology;
pub mod validation;

pub use audit::{AuditedEntity, AuditedRepository, Clock, IdGenerator, SystemClock, UuidV4Generator};
pub use repository::EntityStore;
pub use validation::{FieldConstraints, FieldViolation, FormatRule};
