//! PAN card of a trustee entity

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "trustee_pan_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub trustee_profile_id: String,
    pub pan_card_document_id: Option<String>,
    pub extracted_entity_name: Option<String>,
    pub submitted_entity_name: Option<String>,
    pub extracted_pan_number: Option<String>,
    pub submitted_pan_number: Option<String>,
    pub status: VerificationStatus,
    pub mode: VerificationMode,
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
        belongs_to = "super::trustee_profiles::Entity",
        from = "Column::TrusteeProfileId",
        to = "super::trustee_profiles::Column::Id"
    )]
    TrusteeProfile,
}

impl Related<super::trustee_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrusteeProfile.def()
    }
}

audited_entity!(TrusteePanCards);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("submitted_pan_number", FormatRule::Pan, &self.submitted_pan_number)?;
        Ok(())
    }
}
