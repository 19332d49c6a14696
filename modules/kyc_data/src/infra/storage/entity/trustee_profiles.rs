//! Debenture trustee onboarding profile

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trustee_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub kyc_application_id: String,
    pub legal_entity_name: String,
    #[sea_orm(unique)]
    pub cin: Option<String>,
    /// `IND` followed by nine digits
    #[sea_orm(unique)]
    pub sebi_registration_number: Option<String>,
    /// `YYYY-MM-DD`
    pub sebi_registration_date: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_incorporation: Option<String>,
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
    #[sea_orm(has_one = "super::trustee_pan_cards::Entity")]
    TrusteePanCard,
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

impl Related<super::trustee_pan_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrusteePanCard.def()
    }
}

audited_entity!(TrusteeProfiles);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("cin", FormatRule::Cin, &self.cin)?;
        check_opt("sebi_registration_number", FormatRule::SebiRegistration, &self.sebi_registration_number)?;
        check_opt("sebi_registration_date", FormatRule::Date, &self.sebi_registration_date)?;
        check_opt("date_of_incorporation", FormatRule::Date, &self.date_of_incorporation)?;
        Ok(())
    }
}
