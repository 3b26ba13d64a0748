use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    GENDERS, STUDENT_STATUSES, create_updated_at_trigger, created_at, date_today, enum_string,
    updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(pk_auto(Students::Id))
                    .col(integer(Students::SchoolId))
                    .col(integer(Students::GradeId))
                    .col(integer_null(Students::ClassId))
                    .col(integer_null(Students::DepartmentId))
                    .col(integer_null(Students::AcademicYearId))
                    .col(string_len(Students::Nis, 20))
                    .col(string_len_null(Students::Nisn, 20))
                    .col(string_len(Students::FullName, 100))
                    .col(enum_string(Students::Gender, 1, &GENDERS))
                    .col(string_len_null(Students::BirthPlace, 100))
                    .col(date_null(Students::BirthDate))
                    .col(text_null(Students::Address))
                    .col(string_len_null(Students::ParentName, 100))
                    .col(string_len_null(Students::ParentPhone, 20))
                    .col(string_len_null(Students::PhotoPath, 255))
                    .col(enum_string(Students::Status, 20, &STUDENT_STATUSES).default("ACTIVE"))
                    .col(date_today(Students::EnrolledAt))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_school_id")
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // 仍有学生的年级不可删除
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_grade_id")
                            .from(Students::Table, Students::GradeId)
                            .to(Grades::Table, Grades::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_class_id")
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_department_id")
                            .from(Students::Table, Students::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_academic_year_id")
                            .from(Students::Table, Students::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_students_school_id_nis")
                    .table(Students::Table)
                    .col(Students::SchoolId)
                    .col(Students::Nis)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_status")
                    .table(Students::Table)
                    .col(Students::Status)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "students").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    SchoolId,
    GradeId,
    ClassId,
    DepartmentId,
    AcademicYearId,
    Nis,
    Nisn,
    FullName,
    Gender,
    BirthPlace,
    BirthDate,
    Address,
    ParentName,
    ParentPhone,
    PhotoPath,
    Status,
    EnrolledAt,
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
enum Classes {
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
