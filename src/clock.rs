//! Day-boundary clock used to pick the day's puzzle.

use chrono::{NaiveDate, Utc};

/// Source of "today" for the game service.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    /// Today as `YYYY-MM-DD`, the form used in store keys.
    fn today_iso(&self) -> String {
        self.today().format("%Y-%m-%d").to_string()
    }
}

/// The current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
