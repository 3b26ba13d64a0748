use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{grades, prelude::*};
use crate::storage::lookup::school_id_by_code;

// (名称, 年级)
const GRADES: [(&str, i32); 3] = [("Kelas X", 10), ("Kelas XI", 11), ("Kelas XII", 12)];

pub struct GradesSeed;

#[async_trait]
impl Seed for GradesSeed {
    fn name(&self) -> &'static str {
        "003_grades"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let rows = GRADES.iter().map(|&(name, level)| grades::ActiveModel {
            school_id: Set(school_id),
            name: Set(name.to_string()),
            level: Set(level),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        });

        Grades::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
