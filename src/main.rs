use colored::Colorize;
use school_admin::config::{args::CliArgs, init_config};
use school_admin::runtime::{Command, USAGE, prepare, run_command};
use school_admin::system::install_panic_hook;
use std::env;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // 安装 panic hook
    install_panic_hook();

    // 拆出配置文件路径，其余为子命令
    let cli_args: Vec<String> = env::args().collect();
    let args = CliArgs::parse(&cli_args);

    let command = match Command::parse(&args.rest) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    // 初始化全局配置
    let config = init_config(args.config_path).clone();

    // 初始化日志并连接数据库
    let ctx = match prepare(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    let result = run_command(&ctx, command).await;
    if let Err(e) = &result {
        tracing::error!(cause = e.root_cause().code(), "{}", e.format_simple());
    }

    // 无论成功与否都关闭连接
    ctx.shutdown().await;

    match result {
        Ok(()) => {
            println!("{}", format!("✓ {} completed successfully", command.label()).green().bold());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.format_colored());
            eprintln!("{}", format!("✗ {} failed", command.label()).red().bold());
            ExitCode::FAILURE
        }
    }
}
