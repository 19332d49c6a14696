//! SeaORM implementation of the entity store

use crate::contract::{StoreError, StoreResult};
use crate::domain::audit::AuditedEntity;
use crate::domain::repository::EntityStore;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, IdenStatic,
    IntoActiveModel, Iterable, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, Value,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Entity store over a shared database connection
///
/// Single-record inserts and replacements go through the active model's
/// save hook; bulk updates and deletes are issued as one statement.
/// `replace_by_id` writes the whole record: columns the payload leaves unset
/// are reset, nullable ones to NULL and the soft-delete flags to their insert
/// defaults.
pub struct SeaOrmStore<E> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmStore<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl<E> Clone for SeaOrmStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.db.clone())
    }
}

#[async_trait]
impl<E> EntityStore<E> for SeaOrmStore<E>
where
    E: AuditedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send + Sync,
{
    async fn create(&self, data: E::ActiveModel) -> StoreResult<E::Model> {
        let model = data.insert(&*self.db).await?;
        Ok(model)
    }

    async fn create_all(&self, data: Vec<E::ActiveModel>) -> StoreResult<Vec<E::Model>> {
        // Dropping the transaction on an early return rolls it back
        let txn = self.db.begin().await?;
        let mut created = Vec::with_capacity(data.len());
        for item in data {
            created.push(item.insert(&txn).await?);
        }
        txn.commit().await?;

        tracing::debug!(entity = %E::KIND, count = created.len(), "batch inserted");
        Ok(created)
    }

    async fn update_all(&self, data: E::ActiveModel, filter: Condition) -> StoreResult<u64> {
        let result = E::update_many()
            .set(data)
            .filter(filter)
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn replace_by_id(&self, id: Value, mut data: E::ActiveModel) -> StoreResult<()> {
        let not_found = || StoreError::NotFound {
            entity: E::KIND,
            id: display_id(&id),
        };

        let txn = self.db.begin().await?;
        let current = E::find()
            .filter(E::id_col().eq(id.clone()))
            .one(&txn)
            .await?
            .ok_or_else(not_found)?
            .into_active_model();

        for col in E::Column::iter() {
            let name = col.as_str();
            if name == E::id_col().as_str()
                || name == E::created_at_col().as_str()
                || data.get(col).is_set()
            {
                continue;
            }

            let value = if name == E::is_active_col().as_str() {
                Value::from(true)
            } else if name == E::is_deleted_col().as_str() {
                Value::from(false)
            } else if col.def().is_null() {
                match current.get(col).into_value() {
                    Some(stored) => stored.as_null(),
                    None => continue,
                }
            } else {
                return Err(StoreError::Validation(format!(
                    "{name}: required when replacing {}",
                    E::KIND
                )));
            };
            data.set(col, value);
        }

        data.set(E::id_col(), id.clone());
        match data.update(&txn).await {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => return Err(not_found()),
            Err(err) => return Err(err.into()),
        }
        txn.commit().await?;
        Ok(())
    }

    async fn find(&self, filter: Condition) -> StoreResult<Vec<E::Model>> {
        let models = E::find()
            .filter(filter)
            .order_by_asc(E::created_at_col())
            .all(&*self.db)
            .await?;

        Ok(models)
    }

    async fn find_by_id(&self, id: Value) -> StoreResult<Option<E::Model>> {
        let model = E::find()
            .filter(E::id_col().eq(id))
            .one(&*self.db)
            .await?;

        Ok(model)
    }

    async fn count(&self, filter: Condition) -> StoreResult<u64> {
        let count = E::find().filter(filter).count(&*self.db).await?;
        Ok(count)
    }

    async fn delete_by_id(&self, id: Value) -> StoreResult<()> {
        let result = E::delete_many()
            .filter(E::id_col().eq(id.clone()))
            .exec(&*self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: E::KIND,
                id: display_id(&id),
            });
        }
        Ok(())
    }
}

/// Render an identifier value for error messages
pub(crate) fn display_id(id: &Value) -> String {
    match id {
        Value::String(Some(s)) => s.to_string(),
        Value::Int(Some(n)) => n.to_string(),
        Value::BigInt(Some(n)) => n.to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_id() {
        assert_eq!(display_id(&Value::from("user-1")), "user-1");
        assert_eq!(display_id(&Value::from(42_i32)), "42");
    }
}
