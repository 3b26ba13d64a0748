use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    CASE_STATUSES, create_updated_at_trigger, created_at, date_today, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // 辅导个案
        manager
            .create_table(
                Table::create()
                    .table(CounselingCases::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingCases::Id))
                    .col(integer(CounselingCases::SchoolId))
                    .col(integer(CounselingCases::StudentId))
                    .col(integer_null(CounselingCases::CounselorId))
                    .col(string_len(CounselingCases::Title, 150))
                    .col(string_len_null(CounselingCases::Category, 50))
                    .col(text_null(CounselingCases::Description))
                    .col(enum_string(CounselingCases::Status, 20, &CASE_STATUSES).default("OPEN"))
                    .col(date_today(CounselingCases::OpenedAt))
                    .col(date_null(CounselingCases::ClosedAt))
                    .col(created_at())
                    .col(updated_at(backend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_cases_school_id")
                            .from(CounselingCases::Table, CounselingCases::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_cases_student_id")
                            .from(CounselingCases::Table, CounselingCases::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_cases_counselor_id")
                            .from(CounselingCases::Table, CounselingCases::CounselorId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_counseling_cases_student_id")
                    .table(CounselingCases::Table)
                    .col(CounselingCases::StudentId)
                    .to_owned(),
            )
            .await?;

        // 个案下的辅导会谈
        manager
            .create_table(
                Table::create()
                    .table(CounselingSessions::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingSessions::Id))
                    .col(integer(CounselingSessions::CaseId))
                    .col(integer_null(CounselingSessions::CounselorId))
                    .col(timestamp_with_time_zone(CounselingSessions::SessionAt))
                    .col(text_null(CounselingSessions::Summary))
                    .col(text_null(CounselingSessions::Notes))
                    .col(created_at())
                    .col(updated_at(backend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_sessions_case_id")
                            .from(CounselingSessions::Table, CounselingSessions::CaseId)
                            .to(CounselingCases::Table, CounselingCases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_sessions_counselor_id")
                            .from(CounselingSessions::Table, CounselingSessions::CounselorId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "counseling_cases").await?;
        create_updated_at_trigger(manager, "counseling_sessions").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounselingSessions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CounselingCases::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CounselingCases {
    Table,
    Id,
    SchoolId,
    StudentId,
    CounselorId,
    Title,
    Category,
    Description,
    Status,
    OpenedAt,
    ClosedAt,
}

#[derive(DeriveIden)]
enum CounselingSessions {
    Table,
    Id,
    CaseId,
    CounselorId,
    SessionAt,
    Summary,
    Notes,
}

#[derive(DeriveIden)]
enum Schools {
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
