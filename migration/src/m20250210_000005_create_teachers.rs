use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    GENDERS, create_updated_at_trigger, created_at, enum_string_null, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(pk_auto(Teachers::Id))
                    .col(integer(Teachers::SchoolId))
                    .col(integer_null(Teachers::UserId)) // 登录账号（可选）
                    .col(string_len_null(Teachers::Nip, 30))
                    .col(string_len(Teachers::FullName, 100))
                    .col(enum_string_null(Teachers::Gender, 1, &GENDERS))
                    .col(string_len_null(Teachers::Phone, 20))
                    .col(string_len_null(Teachers::Email, 100))
                    .col(boolean(Teachers::IsActive).default(true))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_school_id")
                            .from(Teachers::Table, Teachers::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_user_id")
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_teachers_school_id_nip")
                    .table(Teachers::Table)
                    .col(Teachers::SchoolId)
                    .col(Teachers::Nip)
                    .unique()
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "teachers").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    SchoolId,
    UserId,
    Nip,
    FullName,
    Gender,
    Phone,
    Email,
    IsActive,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
