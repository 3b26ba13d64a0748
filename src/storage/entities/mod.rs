//! 种子数据用到的实体
//!
//! 表结构以 `migration` crate 为准，这里只映射被种子写入或查询的表。

pub mod prelude;

pub mod academic_years;
pub mod certificate_templates;
pub mod departments;
pub mod grades;
pub mod reward_actions;
pub mod reward_levels;
pub mod reward_types;
pub mod schools;
pub mod sea_orm_active_enums;
pub mod violation_actions;
pub mod violation_types;
