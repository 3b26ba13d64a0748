use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // 数据库错误（原样透出）
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // 种子数据错误
    #[error("Referenced {table} row not found: {key}")]
    MissingReference { table: &'static str, key: String },

    #[error("Duplicate seed name: {0}")]
    DuplicateSeed(String),

    #[error("Seed {seed} failed: {source}")]
    SeedFailed {
        seed: String,
        #[source]
        source: Box<AppError>,
    },

    // 通用错误
    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "E001",
            AppError::MissingReference { .. } => "E002",
            AppError::DuplicateSeed(_) => "E003",
            AppError::SeedFailed { .. } => "E004",
            AppError::Usage(_) => "E005",
            AppError::Io(_) => "E006",
            AppError::Internal(_) => "E014",
            AppError::Config(_) => "E015",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database Error",
            AppError::MissingReference { .. } => "Missing Reference",
            AppError::DuplicateSeed(_) => "Duplicate Seed",
            AppError::SeedFailed { .. } => "Seed Failed",
            AppError::Usage(_) => "Invalid Usage",
            AppError::Io(_) => "IO Error",
            AppError::Internal(_) => "Internal Error",
            AppError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// 种子失败时取出内部的根因
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::SeedFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_failed_keeps_root_cause() {
        let err = AppError::SeedFailed {
            seed: "002_academic_years".to_string(),
            source: Box::new(AppError::MissingReference {
                table: "schools",
                key: "code=SCH001".to_string(),
            }),
        };

        assert_eq!(err.code(), "E004");
        assert_eq!(err.root_cause().code(), "E002");
        assert_eq!(
            err.to_string(),
            "Seed 002_academic_years failed: Referenced schools row not found: code=SCH001"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = AppError::Config("database.url must not be empty".into());
        assert_eq!(
            err.format_simple(),
            "[E015] Configuration Error: Configuration error: database.url must not be empty"
        );
    }
}
