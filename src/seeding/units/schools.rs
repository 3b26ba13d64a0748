use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::{prelude::*, schools};

pub struct SchoolsSeed;

#[async_trait]
impl Seed for SchoolsSeed {
    fn name(&self) -> &'static str {
        "001_schools"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let now = Utc::now();
        let school = schools::ActiveModel {
            code: Set(config.school_code.clone()),
            name: Set(config.school_name.clone()),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        Schools::insert(school).exec(db).await?;
        Ok(())
    }
}
