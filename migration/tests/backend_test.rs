//! 针对 PostgreSQL / MySQL 的迁移测试
//!
//! 需要一个可清空的专用数据库：
//! `SCHOOL_ADMIN_TEST_DATABASE_URL=postgres://... cargo test -p migration -- --ignored`

use migration::{Migrator, MigratorTrait, SchemaManager, TABLES};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, FromQueryResult, Statement};

const URL_VAR: &str = "SCHOOL_ADMIN_TEST_DATABASE_URL";

#[derive(Debug, FromQueryResult)]
struct Count {
    n: i64,
}

async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    Count::find_by_statement(Statement::from_string(db.get_database_backend(), sql))
        .one(db)
        .await
        .expect("Failed to run count query")
        .expect("Count query returned no row")
        .n
}

#[tokio::test]
#[ignore = "requires SCHOOL_ADMIN_TEST_DATABASE_URL"]
async fn test_updated_at_refresh_on_server_backend() {
    let Ok(url) = std::env::var(URL_VAR) else {
        eprintln!("{URL_VAR} not set, skipping");
        return;
    };
    let db = Database::connect(url).await.expect("Failed to connect");

    Migrator::fresh(&db).await.expect("Failed to run fresh");

    db.execute_unprepared(
        "INSERT INTO schools (code, name, updated_at) \
         VALUES ('SCH001', 'SMA Negeri 1', '2000-01-01 00:00:00')",
    )
    .await
    .unwrap();

    // 只改其他列时 updated_at 刷新（PostgreSQL 触发器 / MySQL ON UPDATE）
    db.execute_unprepared("UPDATE schools SET name = 'SMA Negeri 2' WHERE code = 'SCH001'")
        .await
        .unwrap();
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) AS n FROM schools WHERE updated_at > '2001-01-01 00:00:00'"
        )
        .await,
        1
    );

    // 显式写入 updated_at 时保留写入值
    db.execute_unprepared(
        "UPDATE schools SET name = 'SMA Negeri 3', updated_at = '2000-01-01 00:00:00' \
         WHERE code = 'SCH001'",
    )
    .await
    .unwrap();
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) AS n FROM schools WHERE updated_at < '2001-01-01 00:00:00'"
        )
        .await,
        1
    );

    // 全部回滚后不留表（PostgreSQL 同时删除 set_updated_at 函数）
    Migrator::reset(&db).await.expect("Failed to reset");
    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "{table} left behind");
    }
}
