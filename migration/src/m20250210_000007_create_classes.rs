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
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(pk_auto(Classes::Id))
                    .col(integer(Classes::SchoolId))
                    .col(integer(Classes::GradeId))
                    .col(integer_null(Classes::DepartmentId))
                    .col(integer_null(Classes::AcademicYearId))
                    .col(integer_null(Classes::HomeroomTeacherId)) // 班主任
                    .col(string_len(Classes::Name, 50))
                    .col(integer(Classes::Capacity).default(36))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_school_id")
                            .from(Classes::Table, Classes::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_grade_id")
                            .from(Classes::Table, Classes::GradeId)
                            .to(Grades::Table, Grades::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_department_id")
                            .from(Classes::Table, Classes::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_academic_year_id")
                            .from(Classes::Table, Classes::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_classes_homeroom_teacher_id")
                            .from(Classes::Table, Classes::HomeroomTeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_classes_school_grade_year_name")
                    .table(Classes::Table)
                    .col(Classes::SchoolId)
                    .col(Classes::GradeId)
                    .col(Classes::AcademicYearId)
                    .col(Classes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "classes").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    Id,
    SchoolId,
    GradeId,
    DepartmentId,
    AcademicYearId,
    HomeroomTeacherId,
    Name,
    Capacity,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Grades {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AcademicYears {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
}
