// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation, is_noninteractive_mode};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_once_command,
    handle_watch_command, validate_args,
};
use f1_hub::config::Config;
use f1_hub::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    validate_args(&args)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if is_noninteractive_mode(&args) {
        return handle_once_command(&args, &config).await;
    }

    handle_watch_command(&args, &config).await
}
