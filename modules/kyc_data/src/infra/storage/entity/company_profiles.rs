//! Company onboarding profile

use crate::domain::validation::{check, check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub kyc_application_id: String,
    pub company_entity_type_id: String,
    pub company_sector_type_id: String,
    pub company_name: String,
    /// Corporate Identification Number
    #[sea_orm(unique)]
    pub cin: Option<String>,
    /// GST registration number
    #[sea_orm(unique)]
    pub gstin: Option<String>,
    /// MSME registration number
    #[sea_orm(unique)]
    pub udyam_registration_number: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_incorporation: String,
    pub city_of_incorporation: Option<String>,
    pub state_of_incorporation: Option<String>,
    pub country_of_incorporation: Option<String>,
    /// Media id
    pub company_logo: Option<String>,
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
        belongs_to = "super::company_entity_types::Entity",
        from = "Column::CompanyEntityTypeId",
        to = "super::company_entity_types::Column::Id"
    )]
    CompanyEntityType,
    #[sea_orm(
        belongs_to = "super::company_sector_types::Entity",
        from = "Column::CompanySectorTypeId",
        to = "super::company_sector_types::Column::Id"
    )]
    CompanySectorType,
    #[sea_orm(
        belongs_to = "super::kyc_applications::Entity",
        from = "Column::KycApplicationId",
        to = "super::kyc_applications::Column::Id"
    )]
    KycApplication,
    #[sea_orm(has_one = "super::company_pan_cards::Entity")]
    CompanyPanCard,
    #[sea_orm(has_one = "super::business_kyc::Entity")]
    BusinessKyc,
    #[sea_orm(has_one = "super::business_kyc_profile::Entity")]
    BusinessKycProfile,
    #[sea_orm(has_one = "super::business_kyc_agreement::Entity")]
    BusinessKycAgreement,
    #[sea_orm(has_many = "super::business_kyc_audited_financials::Entity")]
    BusinessKycAuditedFinancials,
    #[sea_orm(has_many = "super::business_kyc_guarantor::Entity")]
    BusinessKycGuarantor,
    #[sea_orm(has_many = "super::business_kyc_collateral_assets::Entity")]
    BusinessKycCollateralAssets,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::company_entity_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyEntityType.def()
    }
}

impl Related<super::company_sector_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanySectorType.def()
    }
}

impl Related<super::kyc_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KycApplication.def()
    }
}

impl Related<super::company_pan_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyPanCard.def()
    }
}

impl Related<super::business_kyc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKyc.def()
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

impl Related<super::business_kyc_audited_financials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycAuditedFinancials.def()
    }
}

impl Related<super::business_kyc_guarantor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycGuarantor.def()
    }
}

impl Related<super::business_kyc_collateral_assets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKycCollateralAssets.def()
    }
}

audited_entity!(CompanyProfiles);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("cin", FormatRule::Cin, &self.cin)?;
        check_opt("gstin", FormatRule::Gstin, &self.gstin)?;
        check_opt("udyam_registration_number", FormatRule::Udyam, &self.udyam_registration_number)?;
        check("date_of_incorporation", FormatRule::Date, &self.date_of_incorporation)?;
        Ok(())
    }
}
