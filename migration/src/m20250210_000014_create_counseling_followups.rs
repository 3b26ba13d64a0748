use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    FOLLOWUP_STATUSES, create_updated_at_trigger, created_at, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CounselingFollowups::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingFollowups::Id))
                    .col(integer(CounselingFollowups::SessionId))
                    .col(date(CounselingFollowups::FollowupDate))
                    .col(text(CounselingFollowups::Action))
                    .col(
                        enum_string(CounselingFollowups::Status, 10, &FOLLOWUP_STATUSES)
                            .default("PENDING"),
                    )
                    .col(text_null(CounselingFollowups::Notes))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_followups_session_id")
                            .from(CounselingFollowups::Table, CounselingFollowups::SessionId)
                            .to(CounselingSessions::Table, CounselingSessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_counseling_followups_session_id")
                    .table(CounselingFollowups::Table)
                    .col(CounselingFollowups::SessionId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "counseling_followups").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounselingFollowups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CounselingFollowups {
    Table,
    Id,
    SessionId,
    FollowupDate,
    Action,
    Status,
    Notes,
}

#[derive(DeriveIden)]
enum CounselingSessions {
    Table,
    Id,
}
