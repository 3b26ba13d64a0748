use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde_json::json;

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::sea_orm_active_enums::Orientation;
use crate::storage::entities::{certificate_templates, prelude::*};
use crate::storage::lookup::school_id_by_code;

const WIDTH: i32 = 1123;
const HEIGHT: i32 = 794;

pub struct CertificateTemplatesSeed;

/// 默认版式：各字段的像素坐标与字号
fn default_layout(school_name: &str) -> serde_json::Value {
    json!({
        "version": 1,
        "fields": [
            { "key": "school_name", "text": school_name, "x": 561, "y": 120, "font_size": 28, "align": "center" },
            { "key": "title", "text": "PIAGAM PENGHARGAAN", "x": 561, "y": 200, "font_size": 40, "align": "center" },
            { "key": "student_name", "x": 561, "y": 330, "font_size": 36, "align": "center" },
            { "key": "achievement", "x": 561, "y": 420, "font_size": 22, "align": "center" },
            { "key": "issued_date", "x": 860, "y": 620, "font_size": 16, "align": "left" },
            { "key": "certificate_number", "x": 80, "y": 740, "font_size": 12, "align": "left" }
        ]
    })
}

#[async_trait]
impl Seed for CertificateTemplatesSeed {
    fn name(&self) -> &'static str {
        "010_certificate_templates"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let template = certificate_templates::ActiveModel {
            school_id: Set(school_id),
            name: Set("Piagam Standar".to_string()),
            background_path: Set(None),
            orientation: Set(Orientation::Landscape),
            width: Set(WIDTH),
            height: Set(HEIGHT),
            layout: Set(Some(default_layout(&config.school_name))),
            is_default: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        };

        CertificateTemplates::insert(template).exec(db).await?;
        Ok(())
    }
}
