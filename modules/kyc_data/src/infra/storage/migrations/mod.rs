//! Database migrations for the KYC schema

use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use super::entity;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_kyc_schema::Migration),
            Box::new(m20250301_000002_create_junction_indexes::Migration),
        ]
    }
}

async fn create_table<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .create_table(
            schema
                .create_table_from_entity(entity)
                .if_not_exists()
                .to_owned(),
        )
        .await
}

mod m20250301_000001_create_kyc_schema {
    use super::*;
    use crate::contract::EntityKind;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_kyc_schema"
        }
    }

    macro_rules! create_tables {
        ($manager:expr, $schema:expr, [$($module:ident),* $(,)?]) => {
            $( create_table($manager, $schema, entity::$module::Entity).await?; )*
        };
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let schema = Schema::new(manager.get_database_backend());

            // Parents before children
            create_tables!(manager, &schema, [
                users,
                roles,
                permissions,
                user_roles,
                role_permissions,
                kyc_applications,
                bank_details,
                authorize_signatories,
                media,
                company_entity_types,
                company_sector_types,
                company_profiles,
                company_pan_cards,
                business_kyc_status_master,
                business_kyc,
                business_kyc_profile,
                business_kyc_agreement,
                business_kyc_audited_financials,
                business_kyc_guarantor,
                business_kyc_collateral_assets,
                business_kyc_client_profile,
                trustee_profiles,
                trustee_pan_cards,
                investor_profiles,
                investor_pan_cards,
                documents,
                screens,
                document_screens,
                business_kyc_document_types,
                document_roles,
            ]);

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            for kind in EntityKind::ALL.iter().rev() {
                manager
                    .drop_table(
                        Table::drop()
                            .table(Alias::new(kind.table_name()))
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            Ok(())
        }
    }
}

mod m20250301_000002_create_junction_indexes {
    use super::*;
    use entity::{document_roles, document_screens, role_permissions, user_roles};

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_junction_indexes"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_index(
                    Index::create()
                        .name("uq_user_roles_user_role")
                        .table(user_roles::Entity)
                        .col(user_roles::Column::UserId)
                        .col(user_roles::Column::RoleId)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_role_permissions_role_permission")
                        .table(role_permissions::Entity)
                        .col(role_permissions::Column::RoleId)
                        .col(role_permissions::Column::PermissionId)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_document_screens_document_screen")
                        .table(document_screens::Entity)
                        .col(document_screens::Column::DocumentId)
                        .col(document_screens::Column::ScreenId)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("uq_document_roles_role_document_type")
                        .table(document_roles::Entity)
                        .col(document_roles::Column::RoleId)
                        .col(document_roles::Column::BusinessKycDocumentTypeId)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            for (name, table) in [
                ("uq_document_roles_role_document_type", "document_roles"),
                ("uq_document_screens_document_screen", "document_screens"),
                ("uq_role_permissions_role_permission", "role_permissions"),
                ("uq_user_roles_user_role", "user_roles"),
            ] {
                manager
                    .drop_index(
                        Index::drop()
                            .name(name)
                            .table(Alias::new(table))
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            Ok(())
        }
    }
}
