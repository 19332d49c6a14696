//! Identity and audit timestamps for every repository
//!
//! `AuditedRepository` decorates an [`EntityStore`] and intercepts its four
//! write paths:
//! - `create` / `create_all`: assign an id when the entity's policy asks for
//!   one and none was supplied, then stamp `created_at` and `updated_at`
//! - `update_all` / `replace_by_id`: stamp `updated_at` and drop any
//!   `created_at` from the payload
//!
//! Reads and deletes pass through untouched. The wrapper keeps no state
//! between calls and never rewrites backend errors.

use super::repository::EntityStore;
use crate::contract::{EntityKind, IdPolicy, StoreResult};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Value};
use std::marker::PhantomData;
use std::sync::Arc;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of globally unique record identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers in hyphenated form
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Entity metadata the audited repository relies on
///
/// Every KYC entity shares the same audit block; the columns are looked up
/// through this trait so one wrapper serves all of them.
pub trait AuditedEntity: EntityTrait {
    const KIND: EntityKind;
    const ID_POLICY: IdPolicy;

    fn id_col() -> Self::Column;
    fn created_at_col() -> Self::Column;
    fn updated_at_col() -> Self::Column;
    fn is_active_col() -> Self::Column;
    fn is_deleted_col() -> Self::Column;
    fn deleted_at_col() -> Self::Column;
}

/// Repository that stamps identity and audit metadata before delegating
pub struct AuditedRepository<E, S> {
    store: S,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> AuditedRepository<E, S>
where
    E: AuditedEntity,
    S: EntityStore<E>,
{
    pub fn new(store: S, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            clock,
            ids,
            _entity: PhantomData,
        }
    }

    /// Wrap a store with the wall clock and UUID v4 ids
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, Arc::new(SystemClock), Arc::new(UuidV4Generator))
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.store
    }

    // ===== Intercepted write paths =====

    /// Insert one record
    ///
    /// Caller-supplied `created_at`/`updated_at` values are overwritten.
    pub async fn create(&self, mut data: E::ActiveModel) -> StoreResult<E::Model> {
        let now = self.clock.now();
        self.stamp_new(&mut data, now);
        self.store.create(data).await
    }

    /// Insert a batch; every record carries the same audit instant
    pub async fn create_all(&self, mut data: Vec<E::ActiveModel>) -> StoreResult<Vec<E::Model>> {
        let now = self.clock.now();
        for item in data.iter_mut() {
            self.stamp_new(item, now);
        }
        self.store.create_all(data).await
    }

    /// Update every record matching `filter`
    pub async fn update_all(&self, mut data: E::ActiveModel, filter: Condition) -> StoreResult<u64> {
        let now = self.clock.now();
        self.stamp_update(&mut data, now);
        self.store.update_all(data, filter).await
    }

    /// Replace the record stored under `id`
    pub async fn replace_by_id(
        &self,
        id: impl Into<Value>,
        mut data: E::ActiveModel,
    ) -> StoreResult<()> {
        let now = self.clock.now();
        self.stamp_update(&mut data, now);
        self.store.replace_by_id(id.into(), data).await
    }

    /// Flag a record as deleted through the regular update path
    pub async fn soft_delete_by_id(&self, id: impl Into<Value>) -> StoreResult<u64> {
        let id: Value = id.into();
        let mut data = <E::ActiveModel as ActiveModelTrait>::default();
        data.set(E::is_active_col(), false.into());
        data.set(E::is_deleted_col(), true.into());
        data.set(E::deleted_at_col(), self.clock.now().into());
        self.update_all(data, Condition::all().add(E::id_col().eq(id)))
            .await
    }

    // ===== Pass-through =====

    pub async fn find(&self, filter: Condition) -> StoreResult<Vec<E::Model>> {
        self.store.find(filter).await
    }

    pub async fn find_by_id(&self, id: impl Into<Value>) -> StoreResult<Option<E::Model>> {
        self.store.find_by_id(id.into()).await
    }

    pub async fn count(&self, filter: Condition) -> StoreResult<u64> {
        self.store.count(filter).await
    }

    pub async fn delete_by_id(&self, id: impl Into<Value>) -> StoreResult<()> {
        self.store.delete_by_id(id.into()).await
    }

    // ===== Helpers =====

    fn stamp_new(&self, data: &mut E::ActiveModel, now: DateTime<Utc>) {
        if E::ID_POLICY == IdPolicy::Assigned && !data.get(E::id_col()).is_set() {
            let id = self.ids.generate();
            tracing::debug!(entity = %E::KIND, id = %id, "assigned generated id");
            data.set(E::id_col(), id.into());
        }
        data.set(E::created_at_col(), now.into());
        data.set(E::updated_at_col(), now.into());
    }

    fn stamp_update(&self, data: &mut E::ActiveModel, now: DateTime<Utc>) {
        if data.get(E::created_at_col()).is_set() {
            tracing::debug!(entity = %E::KIND, "dropping created_at from update payload");
            data.not_set(E::created_at_col());
        }
        data.set(E::updated_at_col(), now.into());
    }
}

impl<E, S: Clone> Clone for AuditedRepository<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            clock: self.clock.clone(),
            ids: self.ids.clone(),
            _entity: PhantomData,
        }
    }
}
