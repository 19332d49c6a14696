//! Assets pledged as collateral

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc_collateral_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub business_kyc_id: String,
    pub company_profile_id: String,
    pub asset_type: String,
    pub description: Option<String>,
    /// Estimated value in paise
    pub estimated_value_paise: Option<i64>,
    /// Media id of the valuation report
    pub document_id: Option<String>,
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

audited_entity!(BusinessKycCollateralAssets);

impl FieldConstraints for ActiveModel {}
