//! Investor onboarding profile

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "investor_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub kyc_application_id: String,
    pub full_name: String,
    /// Individual, HUF, corporate, ...
    pub investor_type: String,
    /// `YYYY-MM-DD`, individuals only
    pub date_of_birth: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::kyc_applications::Entity",
        from = "Column::KycApplicationId",
        to = "super::kyc_applications::Column::Id"
    )]
    KycApplication,
    #[sea_orm(has_one = "super::investor_pan_cards::Entity")]
    InvestorPanCard,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::kyc_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KycApplication.def()
    }
}

impl Related<super::investor_pan_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvestorPanCard.def()
    }
}

audited_entity!(InvestorProfiles);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("date_of_birth", FormatRule::Date, &self.date_of_birth)?;
        Ok(())
    }
}
