use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::sea_orm_active_enums::RewardActionKind::{self, *};
use crate::storage::entities::{prelude::*, reward_actions};
use crate::storage::lookup::school_id_by_code;

const REWARD_ACTIONS: [(&str, i32, Option<i32>, RewardActionKind); 4] = [
    ("Piagam penghargaan", 0, Some(49), Certificate),
    ("Piala dan piagam", 50, Some(99), Trophy),
    ("Beasiswa prestasi", 100, Some(199), Money),
    ("Pembebasan biaya kegiatan", 200, None, Privilege),
];

pub struct RewardActionsSeed;

#[async_trait]
impl Seed for RewardActionsSeed {
    fn name(&self) -> &'static str {
        "009_reward_actions"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let rows = REWARD_ACTIONS
            .iter()
            .map(|&(name, min, max, kind)| reward_actions::ActiveModel {
                school_id: Set(school_id),
                name: Set(name.to_string()),
                min_points: Set(min),
                max_points: Set(max),
                kind: Set(kind),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
                ..Default::default()
            });

        RewardActions::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
