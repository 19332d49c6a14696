//! Document types required during business KYC

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc_document_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub label: String,
    #[sea_orm(unique)]
    pub value: String,
    pub description: Option<String>,
    pub is_mandatory: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document_roles::Entity")]
    DocumentRoles,
}

impl Related<super::document_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentRoles.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::document_roles::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::document_roles::Relation::DocumentType.def().rev())
    }
}

audited_entity!(BusinessKycDocumentTypes);

impl FieldConstraints for ActiveModel {}
