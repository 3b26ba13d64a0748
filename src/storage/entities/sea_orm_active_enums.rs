use sea_orm::entity::prelude::*;

/// 违纪严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ViolationSeverity {
    #[sea_orm(string_value = "LIGHT")]
    Light,
    #[sea_orm(string_value = "MEDIUM")]
    Medium,
    #[sea_orm(string_value = "HEAVY")]
    Heavy,
}

/// 奖励兑现方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum RewardActionKind {
    #[sea_orm(string_value = "CERTIFICATE")]
    Certificate,
    #[sea_orm(string_value = "TROPHY")]
    Trophy,
    #[sea_orm(string_value = "MONEY")]
    Money,
    #[sea_orm(string_value = "PRIVILEGE")]
    Privilege,
    #[sea_orm(string_value = "OTHER")]
    Other,
}

/// 证书版式方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Orientation {
    #[sea_orm(string_value = "LANDSCAPE")]
    Landscape,
    #[sea_orm(string_value = "PORTRAIT")]
    Portrait,
}
