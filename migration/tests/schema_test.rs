use migration::{Migrator, MigratorTrait, SchemaManager, TABLES};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbBackend, FromQueryResult, Statement,
};

#[derive(Debug, PartialEq, Eq, FromQueryResult)]
struct SchemaObject {
    kind: String,
    name: String,
}

#[derive(Debug, FromQueryResult)]
struct Count {
    n: i64,
}

/// 创建测试用的内存数据库
async fn setup_test_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

async fn migrated_db() -> DatabaseConnection {
    let db = setup_test_db().await;
    Migrator::up(&db, None).await.expect("Failed to run migrations");
    db
}

/// 当前库中的表、索引、触发器（不含迁移记录表与 SQLite 内部对象）
async fn schema_snapshot(db: &DatabaseConnection) -> Vec<SchemaObject> {
    SchemaObject::find_by_statement(Statement::from_string(
        DbBackend::Sqlite,
        "SELECT type AS kind, name FROM sqlite_master \
         WHERE name NOT LIKE 'sqlite_%' AND name <> 'seaql_migrations' \
         ORDER BY type, name",
    ))
    .all(db)
    .await
    .expect("Failed to read sqlite_master")
}

async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    Count::find_by_statement(Statement::from_string(DbBackend::Sqlite, sql))
        .one(db)
        .await
        .expect("Failed to run count query")
        .expect("Count query returned no row")
        .n
}

async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute_unprepared(sql)
        .await
        .unwrap_or_else(|e| panic!("Statement failed: {sql}: {e}"));
}

/// 学校、年级、班级、学生各一行
async fn seed_student(db: &DatabaseConnection) {
    exec(db, "INSERT INTO schools (code, name) VALUES ('SCH001', 'SMA Negeri 1')").await;
    exec(db, "INSERT INTO grades (school_id, name, level) VALUES (1, 'Kelas X', 10)").await;
    exec(
        db,
        "INSERT INTO classes (school_id, grade_id, name) VALUES (1, 1, 'X-1')",
    )
    .await;
    exec(
        db,
        "INSERT INTO students (school_id, grade_id, class_id, nis, full_name, gender) \
         VALUES (1, 1, 1, '2024001', 'Budi Santoso', 'L')",
    )
    .await;
}

#[tokio::test]
async fn test_up_creates_every_table() {
    let db = migrated_db().await;
    let manager = SchemaManager::new(&db);

    for table in TABLES {
        assert!(
            manager.has_table(table).await.unwrap(),
            "{table} should exist after up"
        );
    }

    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), Migrator::migrations().len());
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rerun_is_noop() {
    let db = migrated_db().await;
    let before = schema_snapshot(&db).await;

    Migrator::up(&db, None).await.expect("Second run should succeed");

    assert_eq!(schema_snapshot(&db).await, before);
    let applied = Migrator::get_applied_migrations(&db).await.unwrap();
    assert_eq!(applied.len(), Migrator::migrations().len());
}

#[tokio::test]
async fn test_each_down_restores_previous_schema() {
    let db = setup_test_db().await;
    let total = Migrator::migrations().len();

    // 逐个执行 up，并记录执行前的结构
    let mut snapshots = Vec::with_capacity(total);
    for _ in 0..total {
        snapshots.push(schema_snapshot(&db).await);
        Migrator::up(&db, Some(1)).await.expect("up step failed");
    }

    // 逐个回滚，结构应与对应 up 之前完全一致
    for expected in snapshots.into_iter().rev() {
        Migrator::down(&db, Some(1)).await.expect("down step failed");
        assert_eq!(schema_snapshot(&db).await, expected);
    }

    assert!(schema_snapshot(&db).await.is_empty());
}

#[tokio::test]
async fn test_down_all_leaves_no_tables() {
    let db = migrated_db().await;
    Migrator::down(&db, None).await.expect("Failed to roll back");

    let manager = SchemaManager::new(&db);
    for table in TABLES {
        assert!(!manager.has_table(table).await.unwrap(), "{table} left behind");
    }
}

#[tokio::test]
async fn test_grade_delete_restricted_by_students() {
    let db = migrated_db().await;
    seed_student(&db).await;

    let result = db.execute_unprepared("DELETE FROM grades WHERE id = 1").await;
    assert!(result.is_err(), "Grade with students must not be deletable");
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM grades").await, 1);
}

#[tokio::test]
async fn test_class_delete_nulls_student_class() {
    let db = migrated_db().await;
    seed_student(&db).await;

    exec(&db, "DELETE FROM classes WHERE id = 1").await;

    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM students").await, 1);
    assert_eq!(
        count(&db, "SELECT COUNT(*) AS n FROM students WHERE class_id IS NULL").await,
        1
    );
}

#[tokio::test]
async fn test_student_delete_cascades_to_violations() {
    let db = migrated_db().await;
    seed_student(&db).await;
    exec(
        &db,
        "INSERT INTO violation_types (school_id, code, name, category, points) \
         VALUES (1, 'V01', 'Terlambat', 'KEDISIPLINAN', 5)",
    )
    .await;
    exec(
        &db,
        "INSERT INTO student_violations (student_id, violation_type_id, points) VALUES (1, 1, 5)",
    )
    .await;

    // 违纪类型被引用时不可删除
    assert!(
        db.execute_unprepared("DELETE FROM violation_types WHERE id = 1")
            .await
            .is_err()
    );

    exec(&db, "DELETE FROM students WHERE id = 1").await;
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM student_violations").await, 0);
}

#[tokio::test]
async fn test_status_columns_reject_unknown_values() {
    let db = migrated_db().await;
    seed_student(&db).await;

    assert_eq!(
        count(&db, "SELECT COUNT(*) AS n FROM students WHERE status = 'ACTIVE'").await,
        1
    );

    let result = db
        .execute_unprepared("UPDATE students SET status = 'EXPELLED' WHERE id = 1")
        .await;
    assert!(result.is_err(), "Unknown status must be rejected");

    exec(&db, "UPDATE students SET status = 'GRADUATED' WHERE id = 1").await;

    let result = db
        .execute_unprepared(
            "INSERT INTO reward_actions (school_id, name, min_points, kind) \
             VALUES (1, 'Voucher', 10, 'VOUCHER')",
        )
        .await;
    assert!(result.is_err(), "Unknown reward action kind must be rejected");
}

#[tokio::test]
async fn test_academic_year_unique_per_school() {
    let db = migrated_db().await;
    exec(&db, "INSERT INTO schools (code, name) VALUES ('SCH001', 'SMA Negeri 1')").await;
    exec(
        &db,
        "INSERT INTO academic_years (school_id, name, start_date, end_date) \
         VALUES (1, '2024/2025', '2024-07-15', '2025-06-20')",
    )
    .await;

    let result = db
        .execute_unprepared(
            "INSERT INTO academic_years (school_id, name, start_date, end_date) \
             VALUES (1, '2024/2025', '2024-07-15', '2025-06-20')",
        )
        .await;
    assert!(result.is_err(), "Duplicate (school_id, name) must be rejected");
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM academic_years").await, 1);
}

#[tokio::test]
async fn test_updated_at_refreshes_on_update() {
    let db = migrated_db().await;
    exec(&db, "INSERT INTO schools (code, name) VALUES ('SCH001', 'SMA Negeri 1')").await;

    // 显式写入 updated_at 时触发器不覆盖
    exec(
        &db,
        "UPDATE schools SET updated_at = '2000-01-01 00:00:00' WHERE code = 'SCH001'",
    )
    .await;
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) AS n FROM schools WHERE updated_at = '2000-01-01 00:00:00'"
        )
        .await,
        1
    );

    exec(&db, "UPDATE schools SET name = 'SMA Negeri 2' WHERE code = 'SCH001'").await;
    assert_eq!(
        count(
            &db,
            "SELECT COUNT(*) AS n FROM schools WHERE updated_at = '2000-01-01 00:00:00'"
        )
        .await,
        0
    );
}

#[tokio::test]
async fn test_reward_tables_drop_child_before_parent() {
    let db = migrated_db().await;
    exec(&db, "INSERT INTO schools (code, name) VALUES ('SCH001', 'SMA Negeri 1')").await;
    exec(
        &db,
        "INSERT INTO reward_levels (school_id, name, rank) VALUES (1, 'Sekolah', 1)",
    )
    .await;
    exec(
        &db,
        "INSERT INTO reward_types (school_id, reward_level_id, name, points) \
         VALUES (1, 1, 'Juara Kelas', 20)",
    )
    .await;

    // 父表先删会违反外键
    let manager = SchemaManager::new(&db);
    let result = db.execute_unprepared(r#"DROP TABLE "reward_levels""#).await;
    assert!(result.is_err(), "Dropping reward_levels first must fail");
    assert!(manager.has_table("reward_levels").await.unwrap());

    // 回滚到奖励表迁移之前（含其后 9 个迁移）
    Migrator::down(&db, Some(9)).await.expect("Failed to roll back");
    for table in ["reward_actions", "reward_types", "reward_levels"] {
        assert!(!manager.has_table(table).await.unwrap(), "{table} left behind");
    }
    assert!(manager.has_table("student_violations").await.unwrap());
}
