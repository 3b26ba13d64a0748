use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    create_updated_at_function, create_updated_at_trigger, created_at, drop_updated_at_function,
    updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_updated_at_function(manager).await?;

        // 创建 schools 表（租户根实体）
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(pk_auto(Schools::Id))
                    .col(string_len_uniq(Schools::Code, 50))
                    .col(string_len(Schools::Name, 100))
                    .col(string_len_null(Schools::Npsn, 20))
                    .col(text_null(Schools::Address))
                    .col(string_len_null(Schools::Phone, 20))
                    .col(string_len_null(Schools::Email, 100))
                    .col(string_len_null(Schools::PrincipalName, 100))
                    .col(string_len_null(Schools::LogoPath, 255)) // 外部存储路径
                    .col(boolean(Schools::IsActive).default(true))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "schools").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;

        drop_updated_at_function(manager).await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Code,
    Name,
    Npsn,
    Address,
    Phone,
    Email,
    PrincipalName,
    LogoPath,
    IsActive,
}
