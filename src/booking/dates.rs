//! Month arithmetic for schedule queries.

use crate::constants::MONTH_LABEL_SUFFIX;
use chrono::{Datelike, NaiveDate};

/// First and last calendar day of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthRange {
    /// Returns `None` when `month` is outside 1-12 or `year` is out of chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last_day = next_month.pred_opt()?;
        Some(MonthRange {
            first_day,
            last_day,
        })
    }

    /// Start of the first day, `YYYY-MM-DDT00:00:00`.
    pub fn start_date_time(&self) -> String {
        format!("{}T00:00:00", self.first_day.format("%Y-%m-%d"))
    }

    /// End of the last day, `YYYY-MM-DDT23:59:59`.
    pub fn end_date_time(&self) -> String {
        format!("{}T23:59:59", self.last_day.format("%Y-%m-%d"))
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }
}

/// Localized month label resource names start with, e.g. `4월`.
pub fn month_label(month: u32) -> String {
    format!("{month}{MONTH_LABEL_SUFFIX}")
}
