use serde::{Deserialize, Serialize};

/// 应用程序配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_database_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_database_min_connections")]
    pub min_connections: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// pretty / compact / json
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

/// 种子数据配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// 种子学校的业务编码，后续种子按此查找学校
    #[serde(default = "default_seed_school_code")]
    pub school_code: String,
    #[serde(default = "default_seed_school_name")]
    pub school_name: String,
    /// 当前学年，格式 `YYYY/YYYY`
    #[serde(default = "default_seed_active_academic_year")]
    pub active_academic_year: String,
}

// ============ Default Functions ============

fn default_database_url() -> String {
    "sqlite://school_admin.db?mode=rwc".to_string()
}

fn default_database_max_connections() -> u32 {
    5
}

fn default_database_min_connections() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_enable_rotation() -> bool {
    true
}

fn default_max_backups() -> u32 {
    5
}

fn default_seed_school_code() -> String {
    "SCH001".to_string()
}

fn default_seed_school_name() -> String {
    "SMA Negeri 1 Contoh".to_string()
}

fn default_seed_active_academic_year() -> String {
    "2024/2025".to_string()
}

// ============ Default Trait Implementations ============

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_database_max_connections(),
            min_connections: default_database_min_connections(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: default_enable_rotation(),
            max_backups: default_max_backups(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            school_code: default_seed_school_code(),
            school_name: default_seed_school_name(),
            active_academic_year: default_seed_active_academic_year(),
        }
    }
}
