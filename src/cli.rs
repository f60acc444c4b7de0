// Command-line overrides. With no flags the script covers the configured window ending today.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::AppConfig;
use crate::error::WindowError;
use crate::window::{BackfillWindow, today_utc};

/// Print SQL that backfills calendar_efficacy_daily for a trailing window of days.
#[derive(Parser, Debug)]
#[command(name = "efficacy-backfill")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of days to backfill (overrides backfill.days)
    #[arg(long)]
    pub days: Option<u32>,

    /// Most recent day to backfill, YYYY-MM-DD (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<NaiveDate>,

    /// Write the script to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Window from flags, falling back to config and today's UTC date.
    pub fn window(&self, config: &AppConfig) -> Result<BackfillWindow, WindowError> {
        let days = self.days.unwrap_or(config.backfill.days);
        let end = self.end_date.unwrap_or_else(today_utc);
        BackfillWindow::new(end, days)
    }
}
