use std::path::PathBuf;

use clap::Parser;
use gympro::{App, AppConfig, init_logging};

#[derive(Parser, Debug)]
#[command(name = "gympro")]
#[command(about = "Terminal front-end for the GymPro gym management service")]
struct Args {
    /// Path to the data directory (default: ~/.gympro/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Base URL of the authentication API (overrides config.yaml)
    #[arg(long)]
    api_url: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gympro")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let mut config = AppConfig::load_or_default(&data_dir);
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url;
    }

    let mut app = App::with_data_dir(data_dir, config)?;

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
