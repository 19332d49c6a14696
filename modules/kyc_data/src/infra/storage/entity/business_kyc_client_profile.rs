//! Major clients of the company under review

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "business_kyc_client_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub business_kyc_id: String,
    pub client_name: String,
    pub client_type: Option<String>,
    pub annual_revenue_paise: Option<i64>,
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
}

impl Related<super::business_kyc::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessKyc.def()
    }
}

audited_entity!(BusinessKycClientProfile);

impl FieldConstraints for ActiveModel {}
