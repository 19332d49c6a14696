//! Storage backend trait
//!
//! One generic CRUD interface per entity, keyed by a single identifier
//! column. Implementations live in infra/storage/store.rs; the audited
//! repository wraps any implementation of this trait.

use crate::contract::StoreResult;
use async_trait::async_trait;
use sea_orm::{Condition, EntityTrait, Value};

/// Per-entity CRUD operations of the relational store
#[async_trait]
pub trait EntityStore<E: EntityTrait>: Send + Sync {
    /// Insert one record and return it with backend defaults applied
    async fn create(&self, data: E::ActiveModel) -> StoreResult<E::Model>;

    /// Insert a batch of records atomically
    async fn create_all(&self, data: Vec<E::ActiveModel>) -> StoreResult<Vec<E::Model>>;

    /// Apply the set fields of `data` to every record matching `filter`
    ///
    /// Returns the number of affected records.
    async fn update_all(&self, data: E::ActiveModel, filter: Condition) -> StoreResult<u64>;

    /// Replace the record with the given identifier
    async fn replace_by_id(&self, id: Value, data: E::ActiveModel) -> StoreResult<()>;

    /// Find all records matching `filter`
    async fn find(&self, filter: Condition) -> StoreResult<Vec<E::Model>>;

    /// Find a record by identifier
    async fn find_by_id(&self, id: Value) -> StoreResult<Option<E::Model>>;

    /// Count records matching `filter`
    async fn count(&self, filter: Condition) -> StoreResult<u64>;

    /// Physically delete a record by identifier
    async fn delete_by_id(&self, id: Value) -> StoreResult<()>;
}
