use sea_orm_migration::{prelude::*, schema::*};

use crate::common::{
    DOCUMENT_TYPES, create_updated_at_trigger, created_at, enum_string, updated_at,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CounselingDocuments::Table)
                    .if_not_exists()
                    .col(pk_auto(CounselingDocuments::Id))
                    .col(integer(CounselingDocuments::CaseId))
                    .col(enum_string(CounselingDocuments::DocumentType, 10, &DOCUMENT_TYPES))
                    // 按 document_type 指向个案 / 会谈 / 跟进记录，不建外键
                    .col(integer(CounselingDocuments::ReferenceId))
                    .col(string_len(CounselingDocuments::FileName, 255))
                    .col(string_len(CounselingDocuments::FilePath, 255))
                    .col(big_integer_null(CounselingDocuments::FileSize))
                    .col(string_len_null(CounselingDocuments::MimeType, 100))
                    .col(integer_null(CounselingDocuments::UploadedBy))
                    .col(created_at())
                    .col(updated_at(manager.get_database_backend()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_documents_case_id")
                            .from(CounselingDocuments::Table, CounselingDocuments::CaseId)
                            .to(CounselingCases::Table, CounselingCases::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_counseling_documents_uploaded_by")
                            .from(CounselingDocuments::Table, CounselingDocuments::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_counseling_documents_type_reference")
                    .table(CounselingDocuments::Table)
                    .col(CounselingDocuments::DocumentType)
                    .col(CounselingDocuments::ReferenceId)
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "counseling_documents").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CounselingDocuments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CounselingDocuments {
    Table,
    Id,
    CaseId,
    DocumentType,
    ReferenceId,
    FileName,
    FilePath,
    FileSize,
    MimeType,
    UploadedBy,
}

#[derive(DeriveIden)]
enum CounselingCases {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
