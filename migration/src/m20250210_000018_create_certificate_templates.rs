use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{ORIENTATIONS, create_updated_at_trigger, created_at, enum_string, updated_at};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每个学校至多一个 is_default 模板，由应用层保证
        manager
            .create_table(
                Table::create()
                    .table(CertificateTemplates::Table)
                    .if_not_exists()
                    .col(pk_auto(CertificateTemplates::Id))
                    .col(integer(CertificateTemplates::SchoolId))
                    .col(string_len(CertificateTemplates::Name, 100))
                    .col(string_len_null(CertificateTemplates::BackgroundPath, 255))
                    .col(
                        enum_string(CertificateTemplates::Orientation, 10, &ORIENTATIONS)
                            .default("LANDSCAPE"),
                    )
                    // 像素尺寸，默认 A4 横向 @96dpi
                    .col(integer(CertificateTemplates::Width).default(1123))
                    .col(integer(CertificateTemplates::Height).default(794))
                    .col(json_null(CertificateTemplates::Layout)) // 字段位置，结构由应用层定义
                    .col(boolean(CertificateTemplates::IsDefault).default(false))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_certificate_templates_school_id")
                            .from(CertificateTemplates::Table, CertificateTemplates::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificate_templates_school_id")
                    .table(CertificateTemplates::Table)
                    .col(CertificateTemplates::SchoolId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "certificate_templates").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CertificateTemplates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CertificateTemplates {
    Table,
    Id,
    SchoolId,
    Name,
    BackgroundPath,
    Orientation,
    Width,
    Height,
    Layout,
    IsDefault,
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
}
