use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogConfig;
use crate::errors::AppError;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// 初始化日志
///
/// 终端输出始终开启；配置了 `file` 时额外写入文件。
/// 返回的 guard 需在进程结束前一直持有，否则文件日志可能丢失。
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Config(format!("Invalid log level {}: {}", config.level, e)))?;

    let mut layers: Vec<BoxedLayer> = vec![format_layer(&config.format, std::io::stdout, true)];

    let guard = match &config.file {
        Some(file) => {
            let appender = file_appender(file, config)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            layers.push(format_layer(&config.format, writer, false));
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to install log subscriber: {}", e)))?;

    tracing::info!("Logging initialized with level: {}", config.level);
    if let Some(file) = &config.file {
        tracing::info!("Writing logs to {}", file);
    }

    Ok(guard)
}

fn format_layer<W>(format: &str, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    match format {
        "json" => fmt::layer().json().with_writer(writer).boxed(),
        "compact" => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
        // pretty format (default)
        _ => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_writer(writer)
            .boxed(),
    }
}

/// 开启轮转时按天切分并保留 `max_backups` 份
fn file_appender(file: &str, config: &LogConfig) -> Result<RollingFileAppender, AppError> {
    let path = Path::new(file);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Config(format!("Invalid log file path: {}", file)))?;

    let builder = RollingFileAppender::builder().filename_prefix(file_name);
    let builder = if config.enable_rotation {
        builder
            .rotation(Rotation::DAILY)
            .max_log_files(config.max_backups.max(1) as usize)
    } else {
        builder.rotation(Rotation::NEVER)
    };

    builder
        .build(directory)
        .map_err(|e| AppError::Config(format!("Failed to open log file {}: {}", file, e)))
}
