use chrono::NaiveDate;
use std::fmt;

use crate::errors::AppError;

/// 学年名称，格式 `YYYY/YYYY`，后一年必须紧接前一年
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicYearName {
    start_year: i32,
}

impl AcademicYearName {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        let invalid = || {
            AppError::Config(format!(
                "Invalid academic year {:?} (expected YYYY/YYYY, e.g. 2024/2025)",
                name
            ))
        };

        let (first, second) = name.trim().split_once('/').ok_or_else(invalid)?;
        let is_year = |s: &str| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit());
        if !is_year(first) || !is_year(second) {
            return Err(invalid());
        }
        let start_year: i32 = first.parse().map_err(|_| invalid())?;
        let end_year: i32 = second.parse().map_err(|_| invalid())?;

        if end_year != start_year + 1 {
            return Err(invalid());
        }

        Ok(Self { start_year })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn previous(&self) -> Self {
        Self {
            start_year: self.start_year - 1,
        }
    }

    /// 第一学期开学日：起始年 7 月 15 日
    pub fn start_date(&self) -> Result<NaiveDate, AppError> {
        ymd(self.start_year, 7, 15)
    }

    /// 学年结束日：次年 6 月 20 日
    pub fn end_date(&self) -> Result<NaiveDate, AppError> {
        ymd(self.start_year + 1, 6, 20)
    }
}

impl fmt::Display for AcademicYearName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start_year, self.start_year + 1)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::Internal(format!("Invalid date {}-{}-{}", year, month, day)))
}
