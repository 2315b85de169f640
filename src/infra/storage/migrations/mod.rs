//! Database migrations for the clockface service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260115_000001_create_secure_settings::Migration)]
    }
}

mod m20260115_000001_create_secure_settings {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SecureSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SecureSettings::Name)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SecureSettings::Value).text().not_null())
                        .col(
                            ColumnDef::new(SecureSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SecureSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SecureSettings {
        Table,
        Name,
        Value,
        UpdatedAt,
    }
}
