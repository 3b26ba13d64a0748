//! 迁移命令封装
//!
//! 迁移单元定义在 `migration` crate 中，这里只负责执行与日志。
//! 任一单元失败即中止，之前已执行的单元保持提交状态。

use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::errors::AppError;

/// 单个迁移单元的执行状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// 执行未应用的迁移，`steps` 为空时全部执行
pub async fn run_migrations(db: &DatabaseConnection, steps: Option<u32>) -> Result<(), AppError> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        tracing::info!("Schema is up to date, nothing to apply");
        return Ok(());
    }

    let count = steps.map_or(pending.len(), |n| pending.len().min(n as usize));
    tracing::info!("Applying {} migration(s)...", count);
    for migration in pending.iter().take(count) {
        tracing::debug!("Pending: {}", migration.name());
    }

    Migrator::up(db, steps).await?;

    tracing::info!("✓ Database migrations completed");
    Ok(())
}

/// 回滚最近 `steps` 个迁移
pub async fn rollback_migrations(db: &DatabaseConnection, steps: u32) -> Result<(), AppError> {
    let applied = Migrator::get_applied_migrations(db).await?;
    if applied.is_empty() {
        tracing::info!("No applied migrations to roll back");
        return Ok(());
    }

    tracing::info!(
        "Rolling back {} migration(s)...",
        applied.len().min(steps as usize)
    );
    Migrator::down(db, Some(steps)).await?;

    tracing::info!("✓ Rollback completed");
    Ok(())
}

/// 回滚全部迁移
pub async fn reset_migrations(db: &DatabaseConnection) -> Result<(), AppError> {
    tracing::info!("Rolling back all migrations...");
    Migrator::reset(db).await?;
    tracing::info!("✓ All migrations rolled back");
    Ok(())
}

/// 删除全部表后重新执行所有迁移
pub async fn fresh_migrations(db: &DatabaseConnection) -> Result<(), AppError> {
    tracing::warn!("Dropping all tables and re-applying every migration");
    Migrator::fresh(db).await?;
    tracing::info!("✓ Fresh schema created");
    Ok(())
}

/// 按执行顺序列出所有迁移及其状态
pub async fn migration_status(db: &DatabaseConnection) -> Result<Vec<MigrationState>, AppError> {
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;

    let states = applied
        .iter()
        .map(|m| MigrationState {
            name: m.name().to_string(),
            applied: true,
        })
        .chain(pending.iter().map(|m| MigrationState {
            name: m.name().to_string(),
            applied: false,
        }))
        .collect();

    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::setup_test_db;
    use migration::SchemaManager;

    #[tokio::test]
    async fn test_status_before_and_after_up() {
        let db = setup_test_db().await;
        let total = Migrator::migrations().len();

        let states = migration_status(&db).await.expect("Failed to read status");
        assert_eq!(states.len(), total);
        assert!(states.iter().all(|s| !s.applied));
        assert_eq!(states[0].name, "m20250210_000001_create_schools");

        run_migrations(&db, Some(3)).await.expect("Failed to migrate");
        let states = migration_status(&db).await.unwrap();
        assert_eq!(states.iter().filter(|s| s.applied).count(), 3);
        assert_eq!(states[2].name, "m20250210_000003_create_academic_years");
        assert!(states[2].applied);
        assert!(!states[3].applied);
    }

    #[tokio::test]
    async fn test_rerun_is_noop() {
        let db = setup_test_db().await;
        run_migrations(&db, None).await.unwrap();
        run_migrations(&db, None).await.expect("Second run should be a no-op");

        let states = migration_status(&db).await.unwrap();
        assert!(states.iter().all(|s| s.applied));
    }

    #[tokio::test]
    async fn test_rollback_and_reset() {
        let db = setup_test_db().await;
        let manager = SchemaManager::new(&db);
        run_migrations(&db, None).await.unwrap();

        rollback_migrations(&db, 1).await.unwrap();
        assert!(!manager.has_table("student_certificates").await.unwrap());
        assert!(manager.has_table("certificate_templates").await.unwrap());

        reset_migrations(&db).await.unwrap();
        assert!(!manager.has_table("schools").await.unwrap());
        let states = migration_status(&db).await.unwrap();
        assert!(states.iter().all(|s| !s.applied));

        // 没有可回滚的迁移时不报错
        rollback_migrations(&db, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_fresh_recreates_schema() {
        let db = setup_test_db().await;
        run_migrations(&db, None).await.unwrap();
        fresh_migrations(&db).await.expect("Failed to run fresh");

        let manager = SchemaManager::new(&db);
        for table in migration::TABLES {
            assert!(manager.has_table(table).await.unwrap(), "{table} missing");
        }
    }
}
