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
                    .table(StudentAchievements::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentAchievements::Id))
                    .col(integer(StudentAchievements::StudentId))
                    .col(string_len(StudentAchievements::Title, 150))
                    .col(string_len_null(StudentAchievements::Level, 50)) // 校级 / 市级 / 国家级 ...
                    .col(string_len_null(StudentAchievements::Rank, 50))
                    .col(date(StudentAchievements::AchievedAt))
                    .col(text_null(StudentAchievements::Description))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_achievements_student_id")
                            .from(StudentAchievements::Table, StudentAchievements::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_achievements_student_id")
                    .table(StudentAchievements::Table)
                    .col(StudentAchievements::StudentId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "student_achievements").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentAchievements::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentAchievements {
    Table,
    Id,
    StudentId,
    Title,
    Level,
    Rank,
    AchievedAt,
    Description,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}
