//! SeaORM entities for the KYC schema
//!
//! Every entity carries the same audit block (`id`, `is_active`,
//! `is_deleted`, `deleted_at`, `created_at`, `updated_at`).
//! `audited_entity!` wires that block into [`AuditedEntity`] and gives the
//! active model its save hook: soft-delete defaults on insert and the
//! entity's field constraints on every save.
//!
//! [`AuditedEntity`]: crate::domain::audit::AuditedEntity

macro_rules! audited_entity {
    ($kind:ident) => {
        audited_entity!($kind, Assigned);
    };
    ($kind:ident, $policy:ident) => {
        impl $crate::domain::audit::AuditedEntity for Entity {
            const KIND: $crate::contract::EntityKind = $crate::contract::EntityKind::$kind;
            const ID_POLICY: $crate::contract::IdPolicy = $crate::contract::IdPolicy::$policy;

            fn id_col() -> Column {
                Column::Id
            }

            fn created_at_col() -> Column {
                Column::CreatedAt
            }

            fn updated_at_col() -> Column {
                Column::UpdatedAt
            }

            fn is_active_col() -> Column {
                Column::IsActive
            }

            fn is_deleted_col() -> Column {
                Column::IsDeleted
            }

            fn deleted_at_col() -> Column {
                Column::DeletedAt
            }
        }

        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                if insert {
                    if self.is_active.is_not_set() {
                        self.is_active = sea_orm::ActiveValue::Set(true);
                    }
                    if self.is_deleted.is_not_set() {
                        self.is_deleted = sea_orm::ActiveValue::Set(false);
                    }
                    if self.deleted_at.is_not_set() {
                        self.deleted_at = sea_orm::ActiveValue::Set(None);
                    }
                }

                $crate::domain::validation::FieldConstraints::check_fields(&self)
                    .map_err(sea_orm::DbErr::from)?;

                Ok(self)
            }
        }
    };
}

pub mod enums;

pub mod authorize_signatories;
pub mod bank_details;
pub mod business_kyc;
pub mod business_kyc_agreement;
pub mod business_kyc_audited_financials;
pub mod business_kyc_client_profile;
pub mod business_kyc_collateral_assets;
pub mod business_kyc_document_types;
pub mod business_kyc_guarantor;
pub mod business_kyc_profile;
pub mod business_kyc_status_master;
pub mod company_entity_types;
pub mod company_pan_cards;
pub mod company_profiles;
pub mod company_sector_types;
pub mod document_roles;
pub mod document_screens;
pub mod documents;
pub mod investor_pan_cards;
pub mod investor_profiles;
pub mod kyc_applications;
pub mod media;
pub mod permissions;
pub mod role_permissions;
pub mod roles;
pub mod screens;
pub mod trustee_pan_cards;
pub mod trustee_profiles;
pub mod user_roles;
pub mod users;

pub use enums::{ApplicationStatus, VerificationMode, VerificationStatus};
