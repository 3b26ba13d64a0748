//! 内置种子
//!
//! 新增种子时在 [`default_registry`] 中注册，名称前缀决定执行位置。

mod academic_years;
mod certificate_templates;
mod departments;
mod grades;
mod reward_actions;
mod reward_levels;
mod reward_types;
mod schools;
mod violation_actions;
mod violation_types;

pub use academic_years::AcademicYearsSeed;
pub use certificate_templates::CertificateTemplatesSeed;
pub use departments::DepartmentsSeed;
pub use grades::GradesSeed;
pub use reward_actions::RewardActionsSeed;
pub use reward_levels::RewardLevelsSeed;
pub use reward_types::RewardTypesSeed;
pub use schools::SchoolsSeed;
pub use violation_actions::ViolationActionsSeed;
pub use violation_types::ViolationTypesSeed;

use super::SeedRegistry;

pub fn default_registry() -> SeedRegistry {
    let mut registry = SeedRegistry::new();
    registry
        .register(SchoolsSeed)
        .register(AcademicYearsSeed)
        .register(GradesSeed)
        .register(DepartmentsSeed)
        .register(ViolationTypesSeed)
        .register(ViolationActionsSeed)
        .register(RewardLevelsSeed)
        .register(RewardTypesSeed)
        .register(RewardActionsSeed)
        .register(CertificateTemplatesSeed);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::errors::AppError;
    use crate::seeding::{Seed, run_seeds};
    use crate::storage::entities::{academic_years, prelude::*};
    use crate::storage::lookup::school_id_by_code;
    use crate::storage::test_support::migrated_db;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use sea_orm::{
        ActiveValue::Set, DatabaseConnection, DbBackend, EntityTrait, FromQueryResult, Statement,
    };

    #[derive(FromQueryResult)]
    struct Count {
        n: i64,
    }

    async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
        Count::find_by_statement(Statement::from_string(DbBackend::Sqlite, sql))
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .n
    }

    async fn rows(db: &DatabaseConnection, table: &str) -> i64 {
        count(db, &format!("SELECT COUNT(*) AS n FROM {table}")).await
    }

    /// 写入单个学年
    struct SingleYear(&'static str);

    #[async_trait]
    impl Seed for SingleYear {
        fn name(&self) -> &'static str {
            self.0
        }

        async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
            let school_id = school_id_by_code(db, &config.school_code).await?;
            let now = Utc::now();
            let year = academic_years::ActiveModel {
                school_id: Set(school_id),
                name: Set("2024/2025".to_string()),
                start_date: Set(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()),
                end_date: Set(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()),
                is_active: Set(true),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            };
            AcademicYears::insert(year).exec(db).await?;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_default_registry_seeds_everything() {
        let db = migrated_db().await;
        let config = SeedConfig::default();

        let report = run_seeds(&db, &default_registry(), &config).await.unwrap();
        assert_eq!(report.applied.len(), default_registry().len());
        assert_eq!(report.applied.len(), 10);
        assert_eq!(report.applied[0], "001_schools");
        assert_eq!(report.applied[9], "010_certificate_templates");

        assert_eq!(rows(&db, "schools").await, 1);
        assert_eq!(rows(&db, "academic_years").await, 2);
        assert_eq!(rows(&db, "grades").await, 3);
        assert_eq!(rows(&db, "departments").await, 3);
        assert_eq!(rows(&db, "violation_types").await, 10);
        assert_eq!(rows(&db, "violation_actions").await, 5);
        assert_eq!(rows(&db, "reward_levels").await, 6);
        assert_eq!(rows(&db, "reward_types").await, 8);
        assert_eq!(rows(&db, "reward_actions").await, 4);
        assert_eq!(rows(&db, "certificate_templates").await, 1);

        let active = count(
            &db,
            "SELECT COUNT(*) AS n FROM academic_years WHERE is_active = 1 AND name = '2024/2025'",
        )
        .await;
        assert_eq!(active, 1);

        // 每个奖励类型都挂在已存在的等级上
        let orphans = count(
            &db,
            "SELECT COUNT(*) AS n FROM reward_types t \
             LEFT JOIN reward_levels l ON l.id = t.reward_level_id WHERE l.id IS NULL",
        )
        .await;
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_second_run_fails_on_unique_school() {
        let db = migrated_db().await;
        let config = SeedConfig::default();
        run_seeds(&db, &default_registry(), &config).await.unwrap();

        let err = run_seeds(&db, &default_registry(), &config)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SeedFailed { ref seed, .. } if seed == "001_schools"));
        assert!(matches!(err.root_cause(), AppError::Database(_)));
        assert_eq!(rows(&db, "schools").await, 1);
        assert_eq!(rows(&db, "grades").await, 3);
    }

    #[tokio::test]
    async fn test_duplicate_academic_year_aborts_run() {
        let db = migrated_db().await;
        let mut registry = SeedRegistry::new();
        registry
            .register(SingleYear("002_year_again"))
            .register(SchoolsSeed)
            .register(SingleYear("002_year"))
            .register(GradesSeed);

        let err = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SeedFailed { ref seed, .. } if seed == "002_year_again"));
        assert!(matches!(err.root_cause(), AppError::Database(_)));
        assert_eq!(rows(&db, "schools").await, 1);
        assert_eq!(rows(&db, "academic_years").await, 1);
        // 002_year_again 排在 003_grades 之前，失败后不再执行后续种子
        assert_eq!(rows(&db, "grades").await, 0);
    }

    #[tokio::test]
    async fn test_missing_parent_names_failing_seed() {
        let db = migrated_db().await;
        let mut registry = SeedRegistry::new();
        registry.register(GradesSeed);

        let err = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::SeedFailed { ref seed, .. } if seed == "003_grades"));
        assert!(matches!(
            err.root_cause(),
            AppError::MissingReference { table: "schools", .. }
        ));
        assert!(err.to_string().contains("SCH001"));
    }

    #[tokio::test]
    async fn test_reward_types_need_levels() {
        let db = migrated_db().await;
        let mut registry = SeedRegistry::new();
        registry.register(SchoolsSeed).register(RewardTypesSeed);

        let err = run_seeds(&db, &registry, &SeedConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err.root_cause(),
            AppError::MissingReference { table: "reward_levels", .. }
        ));
        assert_eq!(rows(&db, "reward_types").await, 0);
    }

    #[tokio::test]
    async fn test_custom_school_from_config() {
        let db = migrated_db().await;
        let config = SeedConfig {
            school_code: "SCH777".into(),
            school_name: "SMK Negeri 7".into(),
            active_academic_year: "2030/2031".into(),
        };

        run_seeds(&db, &default_registry(), &config).await.unwrap();

        let matched = count(
            &db,
            "SELECT COUNT(*) AS n FROM schools WHERE code = 'SCH777' AND name = 'SMK Negeri 7'",
        )
        .await;
        assert_eq!(matched, 1);
        let previous = count(
            &db,
            "SELECT COUNT(*) AS n FROM academic_years WHERE name = '2029/2030' AND is_active = 0",
        )
        .await;
        assert_eq!(previous, 1);
    }
}
