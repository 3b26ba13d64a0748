pub use sea_orm_migration::prelude::*;

mod common;

mod m20250210_000001_create_schools;
mod m20250210_000002_create_users;
mod m20250210_000003_create_academic_years;
mod m20250210_000004_create_grades;
mod m20250210_000005_create_teachers;
mod m20250210_000006_create_departments;
mod m20250210_000007_create_classes;
mod m20250210_000008_create_students;
mod m20250210_000009_create_violation_catalog;
mod m20250210_000010_create_student_violations;
mod m20250210_000011_create_reward_tables;
mod m20250210_000012_create_student_rewards;
mod m20250210_000013_create_counseling_cases;
mod m20250210_000014_create_counseling_followups;
mod m20250210_000015_create_counseling_documents;
mod m20250210_000016_create_counseling_schedules;
mod m20250210_000017_create_student_achievements;
mod m20250210_000018_create_certificate_templates;
mod m20250210_000019_create_student_certificates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // 按名称中的编号升序执行，已执行的记录在 seaql_migrations 中
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250210_000001_create_schools::Migration),
            Box::new(m20250210_000002_create_users::Migration),
            Box::new(m20250210_000003_create_academic_years::Migration),
            Box::new(m20250210_000004_create_grades::Migration),
            Box::new(m20250210_000005_create_teachers::Migration),
            Box::new(m20250210_000006_create_departments::Migration),
            Box::new(m20250210_000007_create_classes::Migration),
            Box::new(m20250210_000008_create_students::Migration),
            Box::new(m20250210_000009_create_violation_catalog::Migration),
            Box::new(m20250210_000010_create_student_violations::Migration),
            Box::new(m20250210_000011_create_reward_tables::Migration),
            Box::new(m20250210_000012_create_student_rewards::Migration),
            Box::new(m20250210_000013_create_counseling_cases::Migration),
            Box::new(m20250210_000014_create_counseling_followups::Migration),
            Box::new(m20250210_000015_create_counseling_documents::Migration),
            Box::new(m20250210_000016_create_counseling_schedules::Migration),
            Box::new(m20250210_000017_create_student_achievements::Migration),
            Box::new(m20250210_000018_create_certificate_templates::Migration),
            Box::new(m20250210_000019_create_student_certificates::Migration),
        ]
    }
}

/// 全部迁移创建的业务表，按创建顺序排列
pub const TABLES: [&str; 23] = [
    "schools",
    "users",
    "academic_years",
    "grades",
    "teachers",
    "departments",
    "classes",
    "students",
    "violation_types",
    "violation_actions",
    "student_violations",
    "reward_levels",
    "reward_types",
    "reward_actions",
    "student_rewards",
    "counseling_cases",
    "counseling_sessions",
    "counseling_followups",
    "counseling_documents",
    "counseling_schedules",
    "student_achievements",
    "certificate_templates",
    "student_certificates",
];
