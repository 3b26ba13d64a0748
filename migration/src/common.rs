//! 迁移共用的列定义与触发器辅助函数

use sea_orm_migration::{prelude::*, schema::*, sea_orm::DbBackend};

/// 学生状态
pub const STUDENT_STATUSES: [&str; 4] = ["ACTIVE", "GRADUATED", "TRANSFERRED", "DROPPED_OUT"];

/// 违纪 / 奖励审核状态
pub const APPROVAL_STATUSES: [&str; 4] = ["PENDING", "APPROVED", "REJECTED", "ACTIONED"];

pub const USER_ROLES: [&str; 4] = ["ADMIN", "TEACHER", "COUNSELOR", "STAFF"];

/// L = 男, P = 女
pub const GENDERS: [&str; 2] = ["L", "P"];

pub const VIOLATION_SEVERITIES: [&str; 3] = ["LIGHT", "MEDIUM", "HEAVY"];

pub const REWARD_ACTION_KINDS: [&str; 5] = ["CERTIFICATE", "TROPHY", "MONEY", "PRIVILEGE", "OTHER"];

pub const CASE_STATUSES: [&str; 3] = ["OPEN", "IN_PROGRESS", "CLOSED"];

pub const FOLLOWUP_STATUSES: [&str; 2] = ["DONE", "PENDING"];

pub const DOCUMENT_TYPES: [&str; 3] = ["CASE", "SESSION", "FOLLOWUP"];

pub const SCHEDULE_STATUSES: [&str; 3] = ["UPCOMING", "DONE", "CANCELLED"];

pub const ORIENTATIONS: [&str; 2] = ["LANDSCAPE", "PORTRAIT"];

#[derive(DeriveIden)]
enum Timestamps {
    CreatedAt,
    UpdatedAt,
}

/// `created_at`，插入时默认当前时间
pub fn created_at() -> ColumnDef {
    timestamp_with_time_zone(Timestamps::CreatedAt)
        .default(Expr::current_timestamp())
        .take()
}

/// `updated_at`，插入时默认当前时间
///
/// MySQL 直接使用 `ON UPDATE CURRENT_TIMESTAMP`，
/// SQLite / PostgreSQL 由 [`create_updated_at_trigger`] 负责刷新。
pub fn updated_at(backend: DbBackend) -> ColumnDef {
    let mut col = timestamp_with_time_zone(Timestamps::UpdatedAt)
        .default(Expr::current_timestamp())
        .take();
    if backend == DbBackend::MySql {
        col.extra("ON UPDATE CURRENT_TIMESTAMP");
    }
    col
}

/// 日期列，默认当天
pub fn date_today<T: IntoIden>(col: T) -> ColumnDef {
    date(col).default(Expr::cust("(CURRENT_DATE)")).take()
}

/// 限定取值集合的字符串列（NOT NULL + CHECK）
pub fn enum_string<T: IntoIden>(col: T, len: u32, values: &[&'static str]) -> ColumnDef {
    let iden = col.into_iden();
    string_len(iden.clone(), len)
        .check(Expr::col(iden).is_in(values.iter().copied()))
        .take()
}

/// 限定取值集合的可空字符串列
pub fn enum_string_null<T: IntoIden>(col: T, len: u32, values: &[&'static str]) -> ColumnDef {
    let iden = col.into_iden();
    string_len_null(iden.clone(), len)
        .check(Expr::col(iden).is_in(values.iter().copied()))
        .take()
}

/// PostgreSQL 共用的 updated_at 刷新函数，由第一个迁移创建
pub async fn create_updated_at_function(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    if manager.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    manager
        .get_connection()
        .execute_unprepared(
            r#"CREATE OR REPLACE FUNCTION set_updated_at() RETURNS TRIGGER AS $$
BEGIN
    IF NEW.updated_at IS NOT DISTINCT FROM OLD.updated_at THEN
        NEW.updated_at = CURRENT_TIMESTAMP;
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql"#,
        )
        .await?;

    Ok(())
}

pub async fn drop_updated_at_function(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    if manager.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    manager
        .get_connection()
        .execute_unprepared("DROP FUNCTION IF EXISTS set_updated_at()")
        .await?;

    Ok(())
}

/// 为表创建 `trg_<table>_updated_at` 触发器
///
/// 更新语句本身已修改 `updated_at` 时不覆盖。删表时触发器随表一起删除。
pub async fn create_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    let sql = match manager.get_database_backend() {
        DbBackend::Sqlite => format!(
            r#"CREATE TRIGGER IF NOT EXISTS "trg_{table}_updated_at"
AFTER UPDATE ON "{table}"
FOR EACH ROW WHEN NEW."updated_at" IS OLD."updated_at"
BEGIN
    UPDATE "{table}" SET "updated_at" = CURRENT_TIMESTAMP WHERE "id" = NEW."id";
END"#
        ),
        DbBackend::Postgres => format!(
            r#"CREATE TRIGGER "trg_{table}_updated_at"
BEFORE UPDATE ON "{table}"
FOR EACH ROW EXECUTE FUNCTION set_updated_at()"#
        ),
        // MySQL 使用列属性
        _ => return Ok(()),
    };

    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
}
