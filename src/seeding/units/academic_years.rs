use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::{AcademicYearName, Seed};
use crate::storage::entities::{academic_years, prelude::*};
use crate::storage::lookup::school_id_by_code;

/// 上一学年（已结束）与当前学年
pub struct AcademicYearsSeed;

#[async_trait]
impl Seed for AcademicYearsSeed {
    fn name(&self) -> &'static str {
        "002_academic_years"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let active = AcademicYearName::parse(&config.active_academic_year)?;
        let now = Utc::now();

        let mut rows = Vec::with_capacity(2);
        for (year, is_active) in [(active.previous(), false), (active, true)] {
            rows.push(academic_years::ActiveModel {
                school_id: Set(school_id),
                name: Set(year.to_string()),
                start_date: Set(year.start_date()?),
                end_date: Set(year.end_date()?),
                is_active: Set(is_active),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            });
        }

        AcademicYears::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
