use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{create_updated_at_trigger, created_at, updated_at};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每个学校至多一个 is_active 学年，由应用层保证
        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .if_not_exists()
                    .col(pk_auto(AcademicYears::Id))
                    .col(integer(AcademicYears::SchoolId))
                    .col(string_len(AcademicYears::Name, 20)) // 例如 2024/2025
                    .col(date(AcademicYears::StartDate))
                    .col(date(AcademicYears::EndDate))
                    .col(boolean(AcademicYears::IsActive).default(false))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_academic_years_school_id")
                            .from(AcademicYears::Table, AcademicYears::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_academic_years_school_id_name")
                    .table(AcademicYears::Table)
                    .col(AcademicYears::SchoolId)
                    .col(AcademicYears::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "academic_years").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicYears::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AcademicYears {
    Table,
    Id,
    SchoolId,
    Name,
    StartDate,
    EndDate,
    IsActive,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
