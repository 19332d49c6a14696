//! Business KYC case opened for a company

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub company_profile_id: String,
    /// Current workflow stage
    pub business_kyc_status_master_id: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
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
    #[sea_orm(
        belongs_to = "super::business_kyc_status_master::Entity",
        from = "Column::BusinessKycStatusMasterId",
        to = "super::business_kyc_status_master::Column::Id"
    )]
    StatusMaster,
    #[sea_orm(has_one = "super::business_kyc_profile::Entity")]
    BusinessKycProfile,
    #[sea_orm(has_one = "super::business_kyc_agreement::Entity")]
    BusinessKycAgreement,
    #[sea_orm(has_many = "super::business_kyc_collateral_assets::Entity")]
    BusinessKycCollateralAssets,
    #[sea_orm(has_many = "super::business_kyc_client_profile::Entity")]
    BusinessKycClientProfile,
    #[sea_orm(has_many = "super::business_kyc_guarantor::Entity")]
    BusinessKycGuarantor,
    #[sea_orm(has_many = "super::business_kyc_audited_financials::Entity")]
    BusinessKycAuditedFinancials,
}

impl Related<super::company_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyProfile.def()
    }
}

impl Related<super::business_kyc_status_master::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusMaster.def()
    }
}

impl Related<super::business_kyc_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycProfile.def()
    }
}

impl Related<super::business_kyc_agreement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycAgreement.def()
    }
}

impl Related<super::business_kyc_collateral_assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycCollateralAssets.def()
    }
}

impl Related<super::business_kyc_client_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycClientProfile.def()
    }
}

impl Related<super::business_kyc_guarantor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycGuarantor.def()
    }
}

impl Related<super::business_kyc_audited_financials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycAuditedFinancials.def()
    }
}

audited_entity!(BusinessKyc);

impl FieldConstraints for ActiveModel {}
