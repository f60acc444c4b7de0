use anyhow::{Context, Result};
use clap::Parser;
use efficacy_backfill::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct UtcTimer;

impl FormatTime for UtcTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let app_config = config::AppConfig::load()?;

    // Logs go to stderr; stdout carries only the generated SQL.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level));
    tracing_subscriber::fmt()
        .with_timer(UtcTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let window = cli.window(&app_config)?;
    tracing::info!(
        start = %window.start(),
        end = %window.end(),
        days = window.days(),
        "backfill window"
    );

    let (statements, destination) = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            let n = backfill::write_script(&mut out, &window)?;
            out.flush()?;
            (n, path.display().to_string())
        }
        None => {
            let mut out = BufWriter::new(std::io::stdout().lock());
            let n = backfill::write_script(&mut out, &window)?;
            out.flush()?;
            (n, "stdout".to_string())
        }
    };
    tracing::info!(statements, output = %destination, "backfill script written");

    Ok(())
}
