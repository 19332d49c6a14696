//! Repository registry and relation loading
//!
//! `Repositories` is built once per connection and hands out audited
//! repositories for every entity. It is passed explicitly to whoever needs
//! data access.

use super::entity;
use super::store::SeaOrmStore;
use crate::contract::{Inclusion, StoreError, StoreResult};
use crate::domain::audit::{
    AuditedEntity, AuditedRepository, Clock, IdGenerator, SystemClock, UuidV4Generator,
};
use crate::domain::topology::{self, RelationEdge};
use sea_orm::{
    Condition, DatabaseConnection, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, Related,
};
use std::sync::Arc;

/// Audited repository over the SeaORM store
pub type KycRepository<E> = AuditedRepository<E, SeaOrmStore<E>>;

/// Every repository of the KYC schema over one connection
#[derive(Clone)]
pub struct Repositories {
    db: Arc<DatabaseConnection>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Repositories {
    pub fn new(db: Arc<DatabaseConnection>, clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { db, clock, ids }
    }

    /// Wall clock and UUID v4 identifiers
    pub fn with_defaults(db: Arc<DatabaseConnection>) -> Self {
        Self::new(db, Arc::new(SystemClock), Arc::new(UuidV4Generator))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Audited repository for any entity
    pub fn repo<E>(&self) -> KycRepository<E>
    where
        E: AuditedEntity,
        E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
        E::ActiveModel: Send + Sync,
    {
        AuditedRepository::new(
            SeaOrmStore::new(self.db.clone()),
            self.clock.clone(),
            self.ids.clone(),
        )
    }

    pub fn relations(&self) -> RelationResolver {
        RelationResolver::new(self.db.clone())
    }
}

macro_rules! typed_repositories {
    ($($module:ident),* $(,)?) => {
        impl Repositories {
            $(
                pub fn $module(&self) -> KycRepository<entity::$module::Entity> {
                    self.repo()
                }
            )*
        }
    };
}

typed_repositories!(
    users,
    roles,
    permissions,
    user_roles,
    role_permissions,
    kyc_applications,
    bank_details,
    authorize_signatories,
    media,
    company_entity_types,
    company_sector_types,
    company_profiles,
    company_pan_cards,
    business_kyc_status_master,
    business_kyc,
    business_kyc_profile,
    business_kyc_agreement,
    business_kyc_audited_financials,
    business_kyc_guarantor,
    business_kyc_collateral_assets,
    business_kyc_client_profile,
    trustee_profiles,
    trustee_pan_cards,
    investor_profiles,
    investor_pan_cards,
    documents,
    screens,
    document_screens,
    business_kyc_document_types,
    document_roles,
);

/// Loads related records along the declared topology
///
/// Cardinality comes from the topology edge, so the same pair of entities
/// can resolve to one record or to many depending on the accessor used.
#[derive(Clone)]
pub struct RelationResolver {
    db: Arc<DatabaseConnection>,
}

impl RelationResolver {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Load `R` records related to `model` along the first edge `E -> R`
    pub async fn include<E, R>(&self, model: &E::Model) -> StoreResult<Inclusion<R::Model>>
    where
        E: AuditedEntity + Related<R>,
        R: AuditedEntity,
        E::Model: Sync,
        R::Model: Send + Sync,
    {
        let edge = resolve_edge::<E, R>(None)?;
        self.load::<E, R>(model, edge).await
    }

    /// Load `R` records related to `model` along the edge called `name`
    pub async fn include_named<E, R>(
        &self,
        model: &E::Model,
        name: &str,
    ) -> StoreResult<Inclusion<R::Model>>
    where
        E: AuditedEntity + Related<R>,
        R: AuditedEntity,
        E::Model: Sync,
        R::Model: Send + Sync,
    {
        let edge = resolve_edge::<E, R>(Some(name))?;
        self.load::<E, R>(model, edge).await
    }

    /// Load every `E` matching `filter` with its `R` records nested
    pub async fn find_including<E, R>(
        &self,
        filter: Condition,
    ) -> StoreResult<Vec<(E::Model, Inclusion<R::Model>)>>
    where
        E: AuditedEntity + Related<R>,
        R: AuditedEntity,
        E::Model: Send + Sync,
        R::Model: Send + Sync,
    {
        let edge = resolve_edge::<E, R>(None)?;
        let rows = E::find()
            .filter(filter)
            .order_by_asc(E::created_at_col())
            .order_by_asc(E::id_col())
            .find_with_related(R::default())
            .order_by_asc(R::created_at_col())
            .all(&*self.db)
            .await?;

        // A to-one edge keeps its earliest child so each parent appears once
        let singular = edge.kind.is_singular();
        Ok(rows
            .into_iter()
            .map(|(parent, children)| {
                let related = if singular {
                    Inclusion::One(children.into_iter().next())
                } else {
                    Inclusion::Many(children)
                };
                (parent, related)
            })
            .collect())
    }

    async fn load<E, R>(
        &self,
        model: &E::Model,
        edge: &RelationEdge,
    ) -> StoreResult<Inclusion<R::Model>>
    where
        E: AuditedEntity + Related<R>,
        R: AuditedEntity,
        E::Model: Sync,
        R::Model: Send + Sync,
    {
        let query = model
            .find_related(R::default())
            .order_by_asc(R::created_at_col());
        tracing::debug!(from = %E::KIND, relation = edge.name, "loading relation");

        if edge.kind.is_singular() {
            Ok(Inclusion::One(query.one(&*self.db).await?))
        } else {
            Ok(Inclusion::Many(query.all(&*self.db).await?))
        }
    }
}

fn resolve_edge<E, R>(name: Option<&str>) -> StoreResult<&'static RelationEdge>
where
    E: AuditedEntity,
    R: AuditedEntity,
{
    let edge = match name {
        Some(name) => topology::named(E::KIND, name).filter(|e| e.to == R::KIND),
        None => topology::edge(E::KIND, R::KIND),
    };

    edge.ok_or(StoreError::UnknownRelation {
        from: E::KIND,
        to: R::KIND,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{EntityKind, RelationKind};

    #[test]
    fn test_resolve_edge_by_pair() {
        let edge =
            resolve_edge::<entity::company_profiles::Entity, entity::business_kyc_agreement::Entity>(None)
                .unwrap();
        assert_eq!(edge.kind, RelationKind::HasOne);
    }

    #[test]
    fn test_resolve_edge_by_name() {
        let edge = resolve_edge::<entity::company_profiles::Entity, entity::business_kyc_agreement::Entity>(
            Some("business_kyc_agreements"),
        )
        .unwrap();
        assert_eq!(edge.kind, RelationKind::HasMany);
    }

    #[test]
    fn test_resolve_edge_rejects_name_of_other_target() {
        let err = resolve_edge::<entity::users::Entity, entity::roles::Entity>(Some("bank_details"))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnknownRelation {
                from: EntityKind::Users,
                to: EntityKind::Roles
            }
        ));
    }
}
