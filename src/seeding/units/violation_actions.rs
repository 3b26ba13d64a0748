use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{prelude::*, violation_actions};
use crate::storage::lookup::school_id_by_code;

// 累计违纪分区间对应的处理措施，上限为空表示不封顶
const VIOLATION_ACTIONS: [(&str, i32, Option<i32>, &str); 5] = [
    ("Teguran lisan", 0, Some(25), "Pembinaan oleh wali kelas"),
    ("Surat peringatan", 26, Some(50), "Surat peringatan tertulis kepada siswa"),
    ("Panggilan orang tua", 51, Some(75), "Orang tua dipanggil ke sekolah"),
    ("Skorsing", 76, Some(99), "Skorsing sesuai keputusan kepala sekolah"),
    ("Dikembalikan ke orang tua", 100, None, "Siswa dikembalikan kepada orang tua"),
];

pub struct ViolationActionsSeed;

#[async_trait]
impl Seed for ViolationActionsSeed {
    fn name(&self) -> &'static str {
        "006_violation_actions"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let rows = VIOLATION_ACTIONS.iter().map(|&(name, min, max, description)| {
            violation_actions::ActiveModel {
                school_id: Set(school_id),
                name: Set(name.to_string()),
                min_points: Set(min),
                max_points: Set(max),
                description: Set(Some(description.to_string())),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            }
        });

        ViolationActions::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
