//! Storage error types
//!
//! These errors are raised by the storage backend and travel through the
//! audited repositories unchanged.

use super::model::EntityKind;
use sea_orm::{DbErr, SqlErr};

/// Marks `DbErr::Custom` messages raised by a field constraint in the save hook
pub const FIELD_VIOLATION_PREFIX: &str = "field violation: ";

/// Result alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by an entity store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given identifier
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity the lookup targeted
        entity: EntityKind,
        /// Identifier that was looked up
        id: String,
    },

    /// A unique constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A foreign key points at a missing parent row
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// A field failed its format constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// No relation is declared between the two entities
    #[error("No relation declared from {from} to {to}")]
    UnknownRelation {
        /// Owning side
        from: EntityKind,
        /// Requested side
        to: EntityKind,
    },

    /// Any other database failure (connection, query, transaction)
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return StoreError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return StoreError::ForeignKey(msg)
            }
            _ => {}
        }

        match err {
            DbErr::Custom(msg) if msg.starts_with(FIELD_VIOLATION_PREFIX) => {
                StoreError::Validation(msg[FIELD_VIOLATION_PREFIX.len()..].to_string())
            }
            other => StoreError::Database(other),
        }
    }
}
