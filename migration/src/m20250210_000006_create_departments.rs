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
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(pk_auto(Departments::Id))
                    .col(integer(Departments::SchoolId))
                    .col(string_len(Departments::Code, 20))
                    .col(string_len(Departments::Name, 100))
                    .col(text_null(Departments::Description))
                    .col(integer_null(Departments::HeadTeacherId))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departments_school_id")
                            .from(Departments::Table, Departments::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departments_head_teacher_id")
                            .from(Departments::Table, Departments::HeadTeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_departments_school_id_code")
                    .table(Departments::Table)
                    .col(Departments::SchoolId)
                    .col(Departments::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "departments").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
    SchoolId,
    Code,
    Name,
    Description,
    HeadTeacherId,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
}
