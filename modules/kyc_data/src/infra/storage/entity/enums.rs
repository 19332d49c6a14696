//! Status and mode codes stored as integers

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review state of a KYC sub-document
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum VerificationStatus {
    #[sea_orm(num_value = 0)]
    UnderReview,
    #[sea_orm(num_value = 1)]
    Approved,
    #[sea_orm(num_value = 2)]
    Rejected,
}

/// How a sub-document was verified
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum VerificationMode {
    /// Extracted and matched by OCR
    #[sea_orm(num_value = 0)]
    Auto,
    #[sea_orm(num_value = 1)]
    Manual,
}

/// Lifecycle of a KYC application
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ApplicationStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    UnderReview,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    Rejected,
}
