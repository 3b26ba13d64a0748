use sea_orm::sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// 连接 SQLite 数据库（自动创建文件，开启 WAL 与外键约束）
pub async fn connect_sqlite(config: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    let opt = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| AppError::Config(format!("Invalid SQLite url {}: {}", config.url, e)))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    // 内存库每个连接各自独立，只能使用单个常驻连接
    let in_memory = config.url.contains(":memory:");
    let max_connections = if in_memory { 1 } else { config.max_connections };

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(config.min_connections.min(max_connections))
        .acquire_timeout(Duration::from_secs(8));
    if in_memory {
        pool_options = pool_options.idle_timeout(None).max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(opt)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to open SQLite database: {}", e)))?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 连接通用数据库（MySQL/PostgreSQL）
pub async fn connect_generic(config: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(config.url.to_owned());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// 按 URL 前缀识别数据库类型并连接
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    let url = config.url.as_str();
    if url.starts_with("sqlite:") {
        tracing::info!("Using SQLite database (WAL, foreign keys on)");
        connect_sqlite(config).await
    } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        tracing::info!("Using PostgreSQL database");
        connect_generic(config).await
    } else if url.starts_with("mysql://") {
        tracing::info!("Using MySQL database");
        connect_generic(config).await
    } else {
        Err(AppError::Config(format!("Unsupported database type: {}", url)))
    }
}

/// 关闭连接，失败只记录不影响退出码
pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => tracing::info!("Database connection closed"),
        Err(e) => tracing::warn!("Failed to close database connection: {}", e),
    }
}
