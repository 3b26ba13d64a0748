use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    VIOLATION_SEVERITIES, create_updated_at_trigger, created_at, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 违纪类型目录
        manager
            .create_table(
                Table::create()
                    .table(ViolationTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(ViolationTypes::Id))
                    .col(integer(ViolationTypes::SchoolId))
                    .col(string_len(ViolationTypes::Code, 20))
                    .col(string_len(ViolationTypes::Name, 100))
                    .col(string_len(ViolationTypes::Category, 50))
                    .col(
                        enum_string(ViolationTypes::Severity, 10, &VIOLATION_SEVERITIES)
                            .default("LIGHT"),
                    )
                    .col(integer(ViolationTypes::Points).default(0))
                    .col(text_null(ViolationTypes::Description))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_types_school_id")
                            .from(ViolationTypes::Table, ViolationTypes::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_violation_types_school_id_code")
                    .table(ViolationTypes::Table)
                    .col(ViolationTypes::SchoolId)
                    .col(ViolationTypes::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 违纪处理措施（按累计分数区间）
        manager
            .create_table(
                Table::create()
                    .table(ViolationActions::Table)
                    .if_not_exists()
                    .col(pk_auto(ViolationActions::Id))
                    .col(integer(ViolationActions::SchoolId))
                    .col(string_len(ViolationActions::Name, 100))
                    .col(integer(ViolationActions::MinPoints))
                    .col(integer_null(ViolationActions::MaxPoints)) // 为空表示无上限
                    .col(text_null(ViolationActions::Description))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_actions_school_id")
                            .from(ViolationActions::Table, ViolationActions::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "violation_types").await?;
        create_updated_at_trigger(manager, "violation_actions").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ViolationActions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ViolationTypes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ViolationTypes {
    Table,
    Id,
    SchoolId,
    Code,
    Name,
    Category,
    Severity,
    Points,
    Description,
}

#[derive(DeriveIden)]
enum ViolationActions {
    Table,
    Id,
    SchoolId,
    Name,
    MinPoints,
    MaxPoints,
    Description,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
