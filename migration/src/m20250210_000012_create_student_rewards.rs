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
                    .table(StudentRewards::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentRewards::Id))
                    .col(integer(StudentRewards::StudentId))
                    .col(integer(StudentRewards::RewardTypeId))
                    .col(integer_null(StudentRewards::RewardActionId))
                    .col(integer_null(StudentRewards::GrantedBy))
                    .col(date_today(StudentRewards::RewardDate))
                    .col(text_null(StudentRewards::Description))
                    .col(integer(StudentRewards::Points).default(0))
                    .col(string_len_null(StudentRewards::EvidencePath, 255))
                    .col(big_integer_null(StudentRewards::EvidenceSize))
                    .col(string_len_null(StudentRewards::EvidenceMimeType, 100))
                    .col(
                        enum_string(StudentRewards::Status, 20, &APPROVAL_STATUSES)
                            .default("PENDING"),
                    )
                    // 公开表彰
                    .col(boolean(StudentRewards::IsAnnounced).default(false))
                    .col(timestamp_with_time_zone_null(StudentRewards::AnnouncedAt))
                    .col(text_null(StudentRewards::Notes))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_rewards_student_id")
                            .from(StudentRewards::Table, StudentRewards::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_rewards_reward_type_id")
                            .from(StudentRewards::Table, StudentRewards::RewardTypeId)
                            .to(RewardTypes::Table, RewardTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_rewards_reward_action_id")
                            .from(StudentRewards::Table, StudentRewards::RewardActionId)
                            .to(RewardActions::Table, RewardActions::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_rewards_granted_by")
                            .from(StudentRewards::Table, StudentRewards::GrantedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_rewards_student_id")
                    .table(StudentRewards::Table)
                    .col(StudentRewards::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_rewards_status")
                    .table(StudentRewards::Table)
                    .col(StudentRewards::Status)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "student_rewards").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentRewards::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentRewards {
    Table,
    Id,
    StudentId,
    RewardTypeId,
    RewardActionId,
    GrantedBy,
    RewardDate,
    Description,
    Points,
    EvidencePath,
    EvidenceSize,
    EvidenceMimeType,
    Status,
    IsAnnounced,
    AnnouncedAt,
    Notes,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum RewardTypes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum RewardActions {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
