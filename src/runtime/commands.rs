//! 子命令解析与执行

use colored::Colorize;
use sea_orm::DatabaseConnection;

use super::startup::StartupContext;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::seeding::{default_registry, run_seeds};
use crate::storage::{
    fresh_migrations, migration_status, reset_migrations, rollback_migrations, run_migrations,
};

pub const USAGE: &str = "\
Usage: school-admin [-c <config>] <command>

Commands:
  migrate up [N]     Apply pending migrations (all, or the next N)
  migrate down [N]   Roll back the last N migrations (default 1)
  migrate reset      Roll back every applied migration
  migrate fresh      Drop all tables and re-apply every migration
  migrate status     List migrations and whether they are applied
  seed               Load reference data into a migrated database
  setup              migrate up, then seed
  help               Show this message

Options:
  -c, --config <path>  Config file (default: config.toml)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up(Option<u32>),
    Down(u32),
    Reset,
    Fresh,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Migrate(MigrateAction),
    Seed,
    Setup,
    Help,
}

impl Command {
    /// 解析子命令（不含程序名与配置参数）
    pub fn parse(args: &[String]) -> Result<Self, AppError> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] => Err(AppError::Usage("missing command".into())),
            ["help" | "-h" | "--help"] => Ok(Command::Help),
            ["seed"] => Ok(Command::Seed),
            ["setup"] => Ok(Command::Setup),
            ["migrate", rest @ ..] => parse_migrate(rest).map(Command::Migrate),
            [cmd, ..] if matches!(*cmd, "seed" | "setup" | "help") => Err(AppError::Usage(
                format!("{} takes no arguments", cmd),
            )),
            [cmd, ..] => Err(AppError::Usage(format!("unknown command: {}", cmd))),
        }
    }

    /// 横幅中显示的名称
    pub fn label(&self) -> &'static str {
        match self {
            Command::Migrate(MigrateAction::Status) => "Status",
            Command::Migrate(_) => "Migration",
            Command::Seed => "Seeding",
            Command::Setup => "Setup",
            Command::Help => "Help",
        }
    }
}

fn parse_migrate(args: &[&str]) -> Result<MigrateAction, AppError> {
    match args {
        // 省略动作时执行 up
        [] | ["up"] => Ok(MigrateAction::Up(None)),
        ["up", n] => Ok(MigrateAction::Up(Some(parse_steps(n)?))),
        ["down"] => Ok(MigrateAction::Down(1)),
        ["down", n] => Ok(MigrateAction::Down(parse_steps(n)?)),
        ["reset"] => Ok(MigrateAction::Reset),
        ["fresh"] => Ok(MigrateAction::Fresh),
        ["status"] => Ok(MigrateAction::Status),
        _ => Err(AppError::Usage(format!(
            "unknown migrate action: {}",
            args.join(" ")
        ))),
    }
}

fn parse_steps(value: &str) -> Result<u32, AppError> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Usage(format!(
            "step count must be a positive integer, got {}",
            value
        ))),
    }
}

/// 在已连接的数据库上执行命令
pub async fn execute(
    command: Command,
    db: &DatabaseConnection,
    config: &AppConfig,
) -> Result<(), AppError> {
    match command {
        Command::Migrate(action) => migrate(action, db).await,
        Command::Seed => seed(db, config).await,
        Command::Setup => {
            run_migrations(db, None).await?;
            seed(db, config).await
        }
        Command::Help => Ok(()),
    }
}

/// 执行命令，panic 也转换为错误返回，保证调用方能关闭连接
pub async fn run_command(ctx: &StartupContext, command: Command) -> Result<(), AppError> {
    let db = ctx.db.clone();
    let config = ctx.config.clone();

    run_isolated(command.label(), async move { execute(command, &db, &config).await }).await
}

/// 在独立任务中运行，依赖 panic 展开（release 配置不能设为 abort）
async fn run_isolated<F>(label: &str, task: F) -> Result<(), AppError>
where
    F: Future<Output = Result<(), AppError>> + Send + 'static,
{
    tokio::spawn(task)
        .await
        .map_err(|e| AppError::Internal(format!("{} aborted: {}", label, e)))?
}

async fn migrate(action: MigrateAction, db: &DatabaseConnection) -> Result<(), AppError> {
    match action {
        MigrateAction::Up(steps) => run_migrations(db, steps).await,
        MigrateAction::Down(steps) => rollback_migrations(db, steps).await,
        MigrateAction::Reset => reset_migrations(db).await,
        MigrateAction::Fresh => fresh_migrations(db).await,
        MigrateAction::Status => {
            let states = migration_status(db).await?;
            let applied = states.iter().filter(|s| s.applied).count();

            for state in &states {
                let mark = if state.applied {
                    "applied".green()
                } else {
                    "pending".yellow()
                };
                println!("  [{}] {}", mark, state.name);
            }
            println!("{} applied, {} pending", applied, states.len() - applied);
            Ok(())
        }
    }
}

async fn seed(db: &DatabaseConnection, config: &AppConfig) -> Result<(), AppError> {
    let registry = default_registry();
    run_seeds(db, &registry, &config.seed).await?;
    Ok(())
}
