//! Portal screens on which documents are collected

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "screens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub label: String,
    #[sea_orm(unique)]
    pub route: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document_screens::Entity")]
    DocumentScreens,
}

impl Related<super::document_screens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentScreens.def()
    }
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        super::document_screens::Relation::Document.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::document_screens::Relation::Screen.def().rev())
    }
}

audited_entity!(Screens);

impl FieldConstraints for ActiveModel {}
