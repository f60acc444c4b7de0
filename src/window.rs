// Trailing window of calendar days: anchor date (inclusive) and day count, newest first.

use chrono::{Days, NaiveDate, Utc};

use crate::error::WindowError;

/// Default number of days covered by one backfill run.
pub const DEFAULT_DAYS: u32 = 60;

/// Current calendar date in UTC (no time component).
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// `days` consecutive calendar days ending at (and including) `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillWindow {
    end: NaiveDate,
    days: u32,
}

impl BackfillWindow {
    pub fn new(end: NaiveDate, days: u32) -> Result<Self, WindowError> {
        if days == 0 {
            return Err(WindowError::EmptyWindow);
        }
        // The oldest day must be representable so that dates() never underflows.
        end.checked_sub_days(Days::new(u64::from(days - 1)))
            .ok_or(WindowError::OutOfRange { end, days })?;
        Ok(Self { end, days })
    }

    /// Window ending today (UTC).
    pub fn ending_today(days: u32) -> Result<Self, WindowError> {
        Self::new(today_utc(), days)
    }

    /// Most recent day of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Oldest day of the window.
    pub fn start(&self) -> NaiveDate {
        self.nth_back(self.days - 1)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Dates in the window, most recent first: end, end - 1, ..., start.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).map(|offset| self.nth_back(offset))
    }

    fn nth_back(&self, offset: u32) -> NaiveDate {
        // Checked in new(): every offset below `days` stays in range.
        self.end
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(NaiveDate::MIN)
    }
}
