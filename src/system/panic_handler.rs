//! Panic handler module
//!
//! 迁移或种子执行中途 panic 时，打印彩色报告并追加到 crash.log，
//! 便于判断数据库停在了哪一步。

use chrono::Utc;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

const CRASH_LOG: &str = "crash.log";

struct CrashReport {
    timestamp: String,
    command: String,
    message: String,
    location: String,
    backtrace: Backtrace,
}

/// 安装自定义 panic hook
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let report = CrashReport {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            command: std::env::args().collect::<Vec<_>>().join(" "),
            message,
            location,
            backtrace: Backtrace::force_capture(),
        };

        if let Err(e) = report.append_to(CRASH_LOG) {
            eprintln!("Failed to write crash log: {}", e);
        }

        report.display();
    }));
}

impl CrashReport {
    fn display(&self) {
        use colored::Colorize;

        let rule = "═══════════════════════════════════════════════════";
        eprintln!();
        eprintln!("{}", rule.red().bold());
        eprintln!("{} {}", "PANIC".red().bold(), env!("CARGO_PKG_VERSION").dimmed());
        eprintln!("{}", rule.red().bold());
        eprintln!();
        eprintln!("{} {}", "Command:".yellow().bold(), self.command.white());
        eprintln!("{} {}", "Reason:".yellow().bold(), self.message.white());
        eprintln!("{} {}", "Location:".yellow().bold(), self.location.white());
        eprintln!();
        eprintln!("{}", "Backtrace:".yellow().bold());
        eprintln!("{}", format!("{:?}", self.backtrace).dimmed());
        eprintln!();
        eprintln!(
            "{}",
            "Already-applied migrations and seeds stay committed; check status before re-running."
                .cyan()
        );
        eprintln!("{}", format!("Details saved to {}", CRASH_LOG).cyan());
        eprintln!("{}", rule.red().bold());
        eprintln!();
    }

    fn append_to(&self, path: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "==========================================")?;
        writeln!(file, "Crash Report - {}", self.timestamp)?;
        writeln!(file, "==========================================")?;
        writeln!(file, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(file, "Command: {}", self.command)?;
        writeln!(file, "Message: {}", self.message)?;
        writeln!(file, "Location: {}", self.location)?;
        writeln!(file, "\nBacktrace:")?;
        writeln!(file, "{:?}", self.backtrace)?;
        writeln!(file, "==========================================\n")?;

        Ok(())
    }
}
