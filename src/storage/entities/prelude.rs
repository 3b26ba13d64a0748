pub use super::academic_years::Entity as AcademicYears;
pub use super::certificate_templates::Entity as CertificateTemplates;
pub use super::departments::Entity as Departments;
pub use super::grades::Entity as Grades;
pub use super::reward_actions::Entity as RewardActions;
pub use super::reward_levels::Entity as RewardLevels;
pub use super::reward_types::Entity as RewardTypes;
pub use super::schools::Entity as Schools;
pub use super::violation_actions::Entity as ViolationActions;
pub use super::violation_types::Entity as ViolationTypes;
