//! 按业务键查找父表主键
//!
//! 后续种子通过这里引用先前种子写入的行，找不到时返回
//! [`AppError::MissingReference`]。

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use super::entities::{prelude::*, *};
use crate::errors::AppError;

/// 按 `code` 查找学校
pub async fn school_id_by_code<C: ConnectionTrait>(db: &C, code: &str) -> Result<i32, AppError> {
    Schools::find()
        .select_only()
        .column(schools::Column::Id)
        .filter(schools::Column::Code.eq(code))
        .into_tuple::<i32>()
        .one(db)
        .await?
        .ok_or_else(|| AppError::MissingReference {
            table: "schools",
            key: format!("code={}", code),
        })
}

/// 按名称查找学校内的奖励等级
pub async fn reward_level_id_by_name<C: ConnectionTrait>(
    db: &C,
    school_id: i32,
    name: &str,
) -> Result<i32, AppError> {
    RewardLevels::find()
        .select_only()
        .column(reward_levels::Column::Id)
        .filter(reward_levels::Column::SchoolId.eq(school_id))
        .filter(reward_levels::Column::Name.eq(name))
        .into_tuple::<i32>()
        .one(db)
        .await?
        .ok_or_else(|| AppError::MissingReference {
            table: "reward_levels",
            key: format!("school_id={}, name={}", school_id, name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::migrated_db;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_missing_school_reports_key() {
        let db = migrated_db().await;

        let err = school_id_by_code(&db, "NOPE").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingReference { table: "schools", ref key } if key == "code=NOPE"
        ));
    }

    #[tokio::test]
    async fn test_lookup_scoped_to_school() {
        let db = migrated_db().await;
        db.execute_unprepared(
            "INSERT INTO schools (code, name) VALUES ('SCH001', 'A'), ('SCH002', 'B')",
        )
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO reward_levels (school_id, name, rank) VALUES (2, 'Nasional', 3)",
        )
        .await
        .unwrap();

        assert_eq!(school_id_by_code(&db, "SCH002").await.unwrap(), 2);
        assert_eq!(reward_level_id_by_name(&db, 2, "Nasional").await.unwrap(), 1);
        assert!(reward_level_id_by_name(&db, 1, "Nasional").await.is_err());
    }
}
