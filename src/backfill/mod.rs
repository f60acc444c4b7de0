// Backfill script generator: header comment, then one daily upsert per day, newest first.
// Output is SQL text only; executing it is left to the caller (e.g. `| psql`).

pub mod template;

use std::io::Write;

use tracing::{debug, instrument};

use crate::window::BackfillWindow;

pub use template::{format_date, render_daily_upsert};

/// Leading SQL comment line for a window of `days` days.
pub fn header_line(days: u32) -> String {
    format!("-- Backfill daily aggregations for the past {} days", days)
}

/// Writes the full script for `window` to `out`. Returns the number of statements written.
/// Each statement is followed by a blank line; write errors are returned as-is.
#[instrument(skip(out), fields(start = %window.start(), end = %window.end(), days = window.days()))]
pub fn write_script<W: Write>(out: &mut W, window: &BackfillWindow) -> std::io::Result<usize> {
    writeln!(out, "{}", header_line(window.days()))?;

    let mut written = 0;
    for date in window.dates() {
        debug!(%date, "rendering daily upsert");
        writeln!(out, "{}", render_daily_upsert(date))?;
        written += 1;
    }
    Ok(written)
}

/// Renders the full script for `window` into a string, laid out as [`write_script`] writes it.
pub fn render_script(window: &BackfillWindow) -> String {
    let mut script = header_line(window.days());
    script.push('\n');
    for date in window.dates() {
        script.push_str(&render_daily_upsert(date));
        script.push('\n');
    }
    script
}
