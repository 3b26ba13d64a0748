use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    APPROVAL_STATUSES, create_updated_at_trigger, created_at, date_today, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentViolations::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentViolations::Id))
                    .col(integer(StudentViolations::StudentId))
                    .col(integer(StudentViolations::ViolationTypeId))
                    .col(integer_null(StudentViolations::ViolationActionId))
                    .col(integer_null(StudentViolations::ReportedBy))
                    .col(date_today(StudentViolations::ViolationDate))
                    .col(string_len_null(StudentViolations::Location, 100))
                    .col(text_null(StudentViolations::Description))
                    .col(integer(StudentViolations::Points).default(0))
                    // 证据文件（外部存储）
                    .col(string_len_null(StudentViolations::EvidencePath, 255))
                    .col(big_integer_null(StudentViolations::EvidenceSize))
                    .col(string_len_null(StudentViolations::EvidenceMimeType, 100))
                    .col(
                        enum_string(StudentViolations::Status, 20, &APPROVAL_STATUSES)
                            .default("PENDING"),
                    )
                    .col(boolean(StudentViolations::ParentNotified).default(false))
                    .col(timestamp_with_time_zone_null(StudentViolations::ParentNotifiedAt))
                    .col(text_null(StudentViolations::Notes))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_violations_student_id")
                            .from(StudentViolations::Table, StudentViolations::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_violations_violation_type_id")
                            .from(StudentViolations::Table, StudentViolations::ViolationTypeId)
                            .to(ViolationTypes::Table, ViolationTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_violations_violation_action_id")
                            .from(StudentViolations::Table, StudentViolations::ViolationActionId)
                            .to(ViolationActions::Table, ViolationActions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_violations_reported_by")
                            .from(StudentViolations::Table, StudentViolations::ReportedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_violations_student_id")
                    .table(StudentViolations::Table)
                    .col(StudentViolations::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_violations_status")
                    .table(StudentViolations::Table)
                    .col(StudentViolations::Status)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "student_violations").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentViolations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentViolations {
    Table,
    Id,
    StudentId,
    ViolationTypeId,
    ViolationActionId,
    ReportedBy,
    ViolationDate,
    Location,
    Description,
    Points,
    EvidencePath,
    EvidenceSize,
    EvidenceMimeType,
    Status,
    ParentNotified,
    ParentNotifiedAt,
    Notes,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ViolationTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ViolationActions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
