use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    SCHEDULE_STATUSES, create_updated_at_trigger, created_at, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CounselingSchedules::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingSchedules::Id))
                    .col(integer_null(CounselingSchedules::CaseId))
                    .col(integer(CounselingSchedules::StudentId))
                    .col(integer(CounselingSchedules::CounselorId))
                    .col(timestamp_with_time_zone(CounselingSchedules::ScheduledAt))
                    .col(integer(CounselingSchedules::DurationMinutes).default(60))
                    .col(string_len_null(CounselingSchedules::Location, 100))
                    .col(text_null(CounselingSchedules::Agenda))
                    .col(
                        enum_string(CounselingSchedules::Status, 10, &SCHEDULE_STATUSES)
                            .default("UPCOMING"),
                    )
                    .col(text_null(CounselingSchedules::Notes))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_schedules_case_id")
                            .from(CounselingSchedules::Table, CounselingSchedules::CaseId)
                            .to(CounselingCases::Table, CounselingCases::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_schedules_student_id")
                            .from(CounselingSchedules::Table, CounselingSchedules::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_schedules_counselor_id")
                            .from(CounselingSchedules::Table, CounselingSchedules::CounselorId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_counseling_schedules_counselor_scheduled_at")
                    .table(CounselingSchedules::Table)
                    .col(CounselingSchedules::CounselorId)
                    .col(CounselingSchedules::ScheduledAt)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "counseling_schedules").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounselingSchedules::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CounselingSchedules {
    Table,
    Id,
    CaseId,
    StudentId,
    CounselorId,
    ScheduledAt,
    DurationMinutes,
    Location,
    Agenda,
    Status,
    Notes,
}

#[derive(DeriveIden)]
enum CounselingCases {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
}
