// src/main.rs
mod app;
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use live_scoreboard::config::Config;
use live_scoreboard::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run_script(&args, &config).await
}
