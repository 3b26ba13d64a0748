use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{create_updated_at_trigger, created_at, updated_at};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(pk_auto(Grades::Id))
                    .col(integer(Grades::SchoolId))
                    .col(string_len(Grades::Name, 50))
                    .col(integer(Grades::Level)) // 排序依据
                    .col(text_null(Grades::Description))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_grades_school_id")
                            .from(Grades::Table, Grades::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_grades_school_id_level")
                    .table(Grades::Table)
                    .col(Grades::SchoolId)
                    .col(Grades::Level)
                    .unique()
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "grades").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Grades {
    Table,
    Id,
    SchoolId,
    Name,
    Level,
    Description,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
