use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    REWARD_ACTION_KINDS, create_updated_at_trigger, created_at, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // 奖励等级
        manager
            .create_table(
                Table::create()
                    .table(RewardLevels::Table)
                    .if_not_exists()
                    .col(pk_auto(RewardLevels::Id))
                    .col(integer(RewardLevels::SchoolId))
                    .col(string_len(RewardLevels::Name, 50))
                    .col(integer(RewardLevels::Rank))
                    .col(text_null(RewardLevels::Description))
                    .col(created_at())
                    .col(updated_at(backend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_levels_school_id")
                            .from(RewardLevels::Table, RewardLevels::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_reward_levels_school_id_name")
                    .table(RewardLevels::Table)
                    .col(RewardLevels::SchoolId)
                    .col(RewardLevels::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 奖励类型，隶属某一等级
        manager
            .create_table(
                Table::create()
                    .table(RewardTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(RewardTypes::Id))
                    .col(integer(RewardTypes::SchoolId))
                    .col(integer(RewardTypes::RewardLevelId))
                    .col(string_len(RewardTypes::Name, 100))
                    .col(integer(RewardTypes::Points).default(0))
                    .col(text_null(RewardTypes::Description))
                    .col(created_at())
                    .col(updated_at(backend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_types_school_id")
                            .from(RewardTypes::Table, RewardTypes::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_types_reward_level_id")
                            .from(RewardTypes::Table, RewardTypes::RewardLevelId)
                            .to(RewardLevels::Table, RewardLevels::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 奖励兑现方式（按积分区间）
        manager
            .create_table(
                Table::create()
                    .table(RewardActions::Table)
                    .if_not_exists()
                    .col(pk_auto(RewardActions::Id))
                    .col(integer(RewardActions::SchoolId))
                    .col(string_len(RewardActions::Name, 100))
                    .col(integer(RewardActions::MinPoints))
                    .col(integer_null(RewardActions::MaxPoints))
                    .col(enum_string(RewardActions::Kind, 20, &REWARD_ACTION_KINDS).default("OTHER"))
                    .col(text_null(RewardActions::Description))
                    .col(created_at())
                    .col(updated_at(backend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reward_actions_school_id")
                            .from(RewardActions::Table, RewardActions::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "reward_levels").await?;
        create_updated_at_trigger(manager, "reward_types").await?;
        create_updated_at_trigger(manager, "reward_actions").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 先子表后父表
        manager
            .drop_table(Table::drop().table(RewardActions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RewardTypes::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RewardLevels::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RewardLevels {
    Table,
    Id,
    SchoolId,
    Name,
    Rank,
    Description,
}

#[derive(DeriveIden)]
enum RewardTypes {
    Table,
    Id,
    SchoolId,
    RewardLevelId,
    Name,
    Points,
    Description,
}

#[derive(DeriveIden)]
enum RewardActions {
    Table,
    Id,
    SchoolId,
    Name,
    MinPoints,
    MaxPoints,
    Kind,
    Description,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
