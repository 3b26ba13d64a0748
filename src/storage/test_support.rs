//! 测试用数据库

use sea_orm::DatabaseConnection;

use super::{connect, run_migrations};
use crate::config::DatabaseConfig;

/// 创建测试用的内存数据库（外键已开启）
pub async fn setup_test_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    connect(&config)
        .await
        .expect("Failed to create test database")
}

/// 已执行全部迁移的内存数据库
pub async fn migrated_db() -> DatabaseConnection {
    let db = setup_test_db().await;
    run_migrations(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}
