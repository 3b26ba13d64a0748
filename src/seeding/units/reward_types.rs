use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{prelude::*, reward_types};
use crate::storage::lookup::{reward_level_id_by_name, school_id_by_code};

// (名称, 等级名称, 积分)
const REWARD_TYPES: [(&str, &str, i32); 8] = [
    ("Juara kelas", "Sekolah", 10),
    ("Siswa teladan", "Sekolah", 15),
    ("Juara lomba tingkat kecamatan", "Kecamatan", 20),
    ("Juara lomba tingkat kabupaten/kota", "Kabupaten/Kota", 30),
    ("Juara lomba tingkat provinsi", "Provinsi", 50),
    ("Juara olimpiade sains nasional", "Nasional", 75),
    ("Juara lomba tingkat nasional", "Nasional", 75),
    ("Juara lomba tingkat internasional", "Internasional", 100),
];

pub struct RewardTypesSeed;

#[async_trait]
impl Seed for RewardTypesSeed {
    fn name(&self) -> &'static str {
        "008_reward_types"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let mut rows = Vec::with_capacity(REWARD_TYPES.len());
        for (name, level, points) in REWARD_TYPES {
            let reward_level_id = reward_level_id_by_name(db, school_id, level).await?;
            rows.push(reward_types::ActiveModel {
                school_id: Set(school_id),
                reward_level_id: Set(reward_level_id),
                name: Set(name.to_string()),
                points: Set(points),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            });
        }

        RewardTypes::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
