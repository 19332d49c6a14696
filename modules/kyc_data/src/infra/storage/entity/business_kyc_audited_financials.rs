//! Audited financial statements per financial year

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc_audited_financials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub business_kyc_id: String,
    pub company_profile_id: String,
    /// e.g. `2023-24`
    pub financial_year: String,
    /// Media id of the statement
    pub document_id: Option<String>,
    /// `YYYY-MM-DD`
    pub audit_date: Option<String>,
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

audited_entity!(BusinessKycAuditedFinancials);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("audit_date", FormatRule::Date, &self.audit_date)?;
        Ok(())
    }
}
