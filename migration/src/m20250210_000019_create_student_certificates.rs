use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{create_updated_at_trigger, created_at, date_today, updated_at};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCertificates::Table)
                    .if_not_exists()
                    .col(pk_auto(StudentCertificates::Id))
                    .col(integer(StudentCertificates::StudentId))
                    .col(integer_null(StudentCertificates::AchievementId))
                    .col(integer_null(StudentCertificates::TemplateId))
                    .col(string_len_uniq(StudentCertificates::CertificateNumber, 50))
                    .col(string_len(StudentCertificates::Title, 150))
                    .col(date_today(StudentCertificates::IssuedAt))
                    // 生成的证书文件（外部存储）
                    .col(string_len_null(StudentCertificates::FilePath, 255))
                    .col(big_integer_null(StudentCertificates::FileSize))
                    .col(timestamp_with_time_zone_null(StudentCertificates::GeneratedAt))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_certificates_student_id")
                            .from(StudentCertificates::Table, StudentCertificates::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_certificates_achievement_id")
                            .from(StudentCertificates::Table, StudentCertificates::AchievementId)
                            .to(StudentAchievements::Table, StudentAchievements::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_certificates_template_id")
                            .from(StudentCertificates::Table, StudentCertificates::TemplateId)
                            .to(CertificateTemplates::Table, CertificateTemplates::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_certificates_student_id")
                    .table(StudentCertificates::Table)
                    .col(StudentCertificates::StudentId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "student_certificates").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCertificates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentCertificates {
    Table,
    Id,
    StudentId,
    AchievementId,
    TemplateId,
    CertificateNumber,
    Title,
    IssuedAt,
    FilePath,
    FileSize,
    GeneratedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum StudentAchievements {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CertificateTemplates {
    Table,
    Id,
}
