use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{departments, prelude::*};
use crate::storage::lookup::school_id_by_code;

const DEPARTMENTS: [(&str, &str, &str); 3] = [
    ("IPA", "Ilmu Pengetahuan Alam", "Peminatan matematika dan ilmu alam"),
    ("IPS", "Ilmu Pengetahuan Sosial", "Peminatan ilmu sosial"),
    ("BHS", "Bahasa dan Budaya", "Peminatan bahasa dan budaya"),
];

pub struct DepartmentsSeed;

#[async_trait]
impl Seed for DepartmentsSeed {
    fn name(&self) -> &'static str {
        "004_departments"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        // 教研组长在教师导入后再指定
        let rows = DEPARTMENTS
            .iter()
            .map(|&(code, name, description)| departments::ActiveModel {
                school_id: Set(school_id),
                code: Set(code.to_string()),
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                head_teacher_id: Set(None),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            });

        Departments::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
