//! PAN card of a company, as extracted by OCR and as submitted

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_pan_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_profile_id: String,
    /// Media id of the uploaded card
    pub pan_card_document_id: Option<String>,
    pub extracted_company_name: Option<String>,
    pub submitted_company_name: Option<String>,
    pub extracted_pan_number: Option<String>,
    pub submitted_pan_number: Option<String>,
    pub extracted_date_of_incorporation: Option<String>,
    pub submitted_date_of_incorporation: Option<String>,
    /// Review outcome
    pub status: VerificationStatus,
    /// Auto (OCR) or manual verification
    pub mode: VerificationMode,
    /// Populated when rejected
    pub reason: Option<String>,
    pub verified_at: Option<DateTimeUtc>,
    pub is_active: bool,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company_profiles::Entity",
        from = "Column::CompanyProfileId",
        to = "super::company_profiles::Column::Id"
    )]
    CompanyProfile,
}

impl Related<super::company_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyProfile.def()
    }
}

audited_entity!(CompanyPanCards);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("submitted_pan_number", FormatRule::Pan, &self.submitted_pan_number)?;
        check_opt("submitted_date_of_incorporation", FormatRule::Date, &self.submitted_date_of_incorporation)?;
        Ok(())
    }
}
