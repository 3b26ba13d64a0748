pub mod commands;
pub mod startup;

pub use commands::{Command, MigrateAction, USAGE, execute, run_command};
pub use startup::{StartupContext, prepare};
