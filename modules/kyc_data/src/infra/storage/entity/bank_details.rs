//! Bank accounts declared by users

use crate::domain::validation::FieldConstraints;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub bank_name: String,
    pub account_holder_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub account_type: Option<String>,
    /// Media id of the cancelled cheque or statement
    pub bank_share_proof: Option<String>,
    pub is_primary: bool,
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
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

audited_entity!(BankDetails);

impl FieldConstraints for ActiveModel {}
