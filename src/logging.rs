use crate::cli::{Args, is_config_operation};
use f1_hub::config::Config;
use f1_hub::constants::LOG_FILE_NAME;
use f1_hub::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIRECTIVE: &str = "f1_hub=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = LOG_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// True when log lines should also go to stdout.
fn echoes_to_stdout(args: &Args) -> bool {
    args.debug || is_config_operation(args)
}

/// Splits a custom log path into directory and file name.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging configuration for the application.
///
/// Configures logging based on the provided arguments and config:
/// - Once and watch mode: logs only to file, so log lines never mix into the table
/// - Debug mode and config commands: logs to both stdout and file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive every log call or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();

    if !echoes_to_stdout(args) {
        // Table output: log only to file, not to stdout
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .try_init()
            .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(!args.plain)
                    .with_filter(env_filter()?),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .try_init()
            .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
