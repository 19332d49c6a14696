//! Guarantors backing a business KYC case
//!
//! Unlike the rest of the schema the identifier is assigned by the database.

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc_guarantor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_kyc_id: String,
    pub company_profile_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub pan_number: Option<String>,
    pub relation_to_company: Option<String>,
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
        belongs_to = "super::business_kyc::Entity",
        from = "Column::BusinessKycId",
        to = "super::business_kyc::Column::Id"
    )]
    BusinessKyc,
    #[sea_orm(
        belongs_to = "super::company_profiles::Entity",
        from = "Column::CompanyProfileId",
        to = "super::company_profiles::Column::Id"
    )]
    CompanyProfile,
}

impl Related<super::business_kyc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKyc.def()
    }
}

impl Related<super::company_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyProfile.def()
    }
}

audited_entity!(BusinessKycGuarantor, StoreGenerated);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("pan_number", FormatRule::Pan, &self.pan_number)?;
        Ok(())
    }
}
