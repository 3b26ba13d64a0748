use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{USER_ROLES, create_updated_at_trigger, created_at, enum_string, updated_at};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(integer_null(Users::SchoolId))
                    .col(string_len_uniq(Users::Username, 50))
                    .col(string_len_uniq(Users::Email, 100))
                    .col(string_len(Users::PasswordHash, 255))
                    .col(string_len(Users::FullName, 100))
                    .col(enum_string(Users::Role, 20, &USER_ROLES).default("STAFF"))
                    .col(boolean(Users::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Users::LastLoginAt))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_school_id")
                            .from(Users::Table, Users::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_school_id")
                    .table(Users::Table)
                    .col(Users::SchoolId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "users").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    SchoolId,
    Username,
    Email,
    PasswordHash,
    FullName,
    Role,
    IsActive,
    LastLoginAt,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
