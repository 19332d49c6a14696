//! Registered users of the onboarding portal

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kyc_applications::Entity")]
    KycApplications,
    #[sea_orm(has_many = "super::bank_details::Entity")]
    BankDetails,
    #[sea_orm(has_many = "super::authorize_signatories::Entity")]
    AuthorizeSignatories,
    #[sea_orm(has_many = "super::user_roles::Entity")]
    UserRoles,
}

impl Related<super::kyc_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KycApplications.def()
    }
}

impl Related<super::bank_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BankDetails.def()
    }
}

impl Related<super::authorize_signatories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthorizeSignatories.def()
    }
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRoles.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_roles::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_roles::Relation::User.def().rev())
    }
}

audited_entity!(Users);

impl FieldConstraints for ActiveModel {}
