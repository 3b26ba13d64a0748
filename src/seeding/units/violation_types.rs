use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

use crate::config::SeedConfig;
use crate::errors::AppError;
use crate::seeding::Seed;
use crate::storage::entities::sea_orm_active_enums::ViolationSeverity::{self, *};
use crate::storage::entities::{prelude::*, violation_types};
use crate::storage::lookup::school_id_by_code;

struct ViolationTypeRow {
    code: &'static str,
    name: &'static str,
    category: &'static str,
    severity: ViolationSeverity,
    points: i32,
}

const fn row(
    code: &'static str,
    name: &'static str,
    category: &'static str,
    severity: ViolationSeverity,
    points: i32,
) -> ViolationTypeRow {
    ViolationTypeRow {
        code,
        name,
        category,
        severity,
        points,
    }
}

const VIOLATION_TYPES: [ViolationTypeRow; 10] = [
    row("KDS-01", "Terlambat masuk sekolah", "Kedisiplinan", Light, 5),
    row("KDS-02", "Tidak mengikuti upacara", "Kedisiplinan", Light, 5),
    row("KDS-03", "Membolos", "Kedisiplinan", Medium, 15),
    row("KRP-01", "Seragam tidak sesuai ketentuan", "Kerapian", Light, 5),
    row("KRP-02", "Rambut tidak sesuai ketentuan", "Kerapian", Light, 5),
    row("SKP-01", "Berkata tidak sopan", "Sikap", Medium, 10),
    row("SKP-02", "Menyontek saat ujian", "Sikap", Medium, 20),
    row("SKP-03", "Merokok di lingkungan sekolah", "Sikap", Heavy, 40),
    row("BRT-01", "Berkelahi", "Berat", Heavy, 50),
    row("BRT-02", "Membawa senjata tajam", "Berat", Heavy, 75),
];

pub struct ViolationTypesSeed;

#[async_trait]
impl Seed for ViolationTypesSeed {
    fn name(&self) -> &'static str {
        "005_violation_types"
    }

    async fn run(&self, db: &DatabaseConnection, config: &SeedConfig) -> Result<(), AppError> {
        let school_id = school_id_by_code(db, &config.school_code).await?;
        let now = Utc::now();

        let rows = VIOLATION_TYPES.iter().map(|v| violation_types::ActiveModel {
            school_id: Set(school_id),
            code: Set(v.code.to_string()),
            name: Set(v.name.to_string()),
            category: Set(v.category.to_string()),
            severity: Set(v.severity),
            points: Set(v.points),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        });

        ViolationTypes::insert_many(rows).exec(db).await?;
        Ok(())
    }
}
