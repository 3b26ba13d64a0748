use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{prelude::*, reward_levels};
use crate::storage::lookup::school_id_by_code;

pub(super) const REWARD_LEVELS: [(&str, i32); 6] = [
    ("Sekolah", 1),
    ("Kecamatan", 2),
    ("Kabupaten/Kota", 3),
    ("Provinsi", 4),
    ("Nasional", 5),
    ("Internasional", 6),
];

pub struct RewardLevelsSeed;

#[async_trait]
impl Seed for RewardLevelsSeed {
    fn name(&self) -> &'static str {
        "007_reward_levels"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let rows = REWARD_LEVELS.iter().map(|&(name, rank)| reward_levels::ActiveModel {
            school_id: Set(school_id),
            name: Set(name.to_string()),
            rank: Set(rank),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        });

        RewardLevels::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
