//! People authorised to sign on behalf of a user's entity

use crate::domain::validation::{check_opt, FieldConstraints, FieldViolation, FormatRule};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{VerificationMode, VerificationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "authorize_signatories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub designation: String,
    pub pan_number: Option<String>,
    pub board_resolution: Option<String>,
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

audited_entity!(AuthorizeSignatories);

impl FieldConstraints for ActiveModel {
    fn check_fields(&self) -> Result<(), FieldViolation> {
        check_opt("pan_number", FormatRule::Pan, &self.pan_number)?;
        Ok(())
    }
}
