//! 种子执行器
//!
//! 单次顺序执行，遇到第一个失败立即停止。已成功的种子不回滚，
//! 也不重试。

use sea_orm::DatabaseConnection;

use super::registry::SeedRegistry;
use crate::config::SeedConfig;
use crate::errors::AppError;

/// 一次成功执行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub applied: Vec<&'static str>,
}

pub async fn run_seeds(
    db: &DatabaseConnection,
    registry: &SeedRegistry,
    config: &SeedConfig,
) -> Result<SeedReport, AppError> {
    tracing::info!("Running {} seed(s)...", registry.len());
    let seeds = registry.ordered()?;

    let mut applied = Vec::with_capacity(seeds.len());
    for seed in seeds {
        tracing::debug!("Seeding {}", seed.name());

        if let Err(e) = seed.run(db, config).await {
            tracing::error!("✗ Seed {} failed: {}", seed.name(), e);
            return Err(AppError::SeedFailed {
                seed: seed.name().to_string(),
                source: Box::new(e),
            });
        }

        tracing::info!("✓ Seeded {}", seed.name());
        applied.push(seed.name());
    }

    tracing::info!("✓ All {} seed(s) applied", applied.len());
    Ok(SeedReport { applied })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::registry::tests::{Probe, probe};
    use crate::storage::test_support::setup_test_db;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn test_runs_in_name_order() {
        let db = setup_test_db().await;
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SeedRegistry::new();
        registry
            .register(probe("002-b", &log))
            .register(probe("001-a", &log));

        let report = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap();

        assert_eq!(report.applied, vec!["001-a", "002-b"]);
        assert_eq!(*log.lock().unwrap(), vec!["001-a", "002-b"]);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let db = setup_test_db().await;
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SeedRegistry::new();
        registry
            .register(probe("001-a", &log))
            .register(Probe {
                name: "002-b",
                log: log.clone(),
                fail: true,
            })
            .register(probe("003-c", &log));

        let err = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SeedFailed { ref seed, .. } if seed == "002-b"));
        assert!(matches!(err.root_cause(), AppError::Internal(_)));
        assert_eq!(*log.lock().unwrap(), vec!["001-a", "002-b"]);
    }

    #[tokio::test]
    async fn test_duplicate_runs_nothing() {
        let db = setup_test_db().await;
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = SeedRegistry::new();
        registry.register(probe("001-a", &log)).register(probe("001-a", &log));

        let err = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateSeed(_)));
        assert!(log.lock().unwrap().is_empty());
    }
}
