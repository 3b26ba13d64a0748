//! 初始数据
//!
//! 种子在编译期注册到 [`SeedRegistry`]，由 [`run_seeds`] 按名称顺序执行。

mod academic_year;
mod registry;
mod runner;
pub mod units;

pub use academic_year::AcademicYearName;
pub use registry::{Seed, SeedRegistry};
pub use runner::{SeedReport, run_seeds};
pub use units::default_registry;
