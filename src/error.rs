// Domain errors. Application boundaries (main, config) use anyhow.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while resolving the backfill window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("backfill window must cover at least one day")]
    EmptyWindow,

    #[error("backfill window of {days} days ending {end} reaches before the supported calendar")]
    OutOfRange { end: NaiveDate, days: u32 },
}
