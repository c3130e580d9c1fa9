use std::path::PathBuf;

use clap::Parser;

use tailboard::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "tailboard")]
#[command(about = "Monte Carlo scenario dashboards for an autonomous trucking carrier")]
struct Args {
    /// Monte Carlo trials drawn per distribution
    #[arg(short = 'n', long, default_value_t = 5000)]
    variates: usize,

    /// Directory for the log file (default: ~/.tailboard/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tailboard")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    if args.variates == 0 {
        color_eyre::eyre::bail!("--variates must be at least 1");
    }

    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);
    init_logging(&log_dir, &args.log_level)?;

    let mut app = App::new(args.variates);
    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
