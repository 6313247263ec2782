//! Month selection token and day enumeration.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimesheetError;

/// Suffix appended to the month token to form the Drive file name.
const FILE_SUFFIX: &str = "INDECOMM-TIMESHEET";

/// A month+year selection, written as `"{MonthName}{Year}"` (e.g. `August2025`).
///
/// This is the token the month picker produces; everything downstream
/// (grid construction, file naming, sheet titles) derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    month: u32, // 1..=12
    year: i32,
}

impl MonthYear {
    /// Returns `None` if the month number is out of range or the year is not
    /// representable as a calendar date.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(MonthYear { month, year })
    }

    /// The current month in local time.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        MonthYear {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Full English month name.
    pub fn month_name(&self) -> &'static str {
        // Unwrap safe: month is validated to 1..=12 on construction
        Month::try_from(self.month as u8).unwrap().name()
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Number of days in this month.
    pub fn day_count(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
        next.signed_duration_since(self.first_day()).num_days() as u32
    }

    /// Every calendar day of this month, ascending from day 1.
    pub fn days(&self) -> Vec<NaiveDate> {
        let first = self.first_day();
        (0..self.day_count())
            .map(|offset| first + chrono::Duration::days(i64::from(offset)))
            .collect()
    }

    /// Human-readable label, e.g. `"August 2025"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Name of the Drive file holding this month's timesheet.
    pub fn file_name(&self) -> String {
        format!("{self}-{FILE_SUFFIX}")
    }
}

impl Default for MonthYear {
    fn default() -> Self {
        MonthYear::current()
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.month_name(), self.year)
    }
}

impl FromStr for MonthYear {
    type Err = TimesheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits_at = s
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| TimesheetError::Month(s.to_string()))?;
        let (name, digits) = s.split_at(digits_at);
        let month = name
            .parse::<Month>()
            .map_err(|_| TimesheetError::Month(s.to_string()))?;
        let year = digits
            .parse::<i32>()
            .map_err(|_| TimesheetError::Month(s.to_string()))?;
        MonthYear::new(month.number_from_month(), year)
            .ok_or_else(|| TimesheetError::Month(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_token() {
        let month: MonthYear = "August2025".parse().unwrap();
        assert_eq!(month.month(), 8);
        assert_eq!(month.year(), 2025);
        assert_eq!(month.to_string(), "August2025");
    }

    #[test]
    fn rejects_bad_tokens() {
        assert!("Augus2025".parse::<MonthYear>().is_err());
        assert!("August".parse::<MonthYear>().is_err());
        assert!("2025".parse::<MonthYear>().is_err());
    }

    #[test]
    fn day_counts_match_the_calendar() {
        assert_eq!("February2024".parse::<MonthYear>().unwrap().day_count(), 29);
        assert_eq!("February2025".parse::<MonthYear>().unwrap().day_count(), 28);
        assert_eq!("April2025".parse::<MonthYear>().unwrap().day_count(), 30);
        assert_eq!("December2025".parse::<MonthYear>().unwrap().day_count(), 31);
    }

    #[test]
    fn days_are_ascending_and_consecutive() {
        let month: MonthYear = "September2025".parse().unwrap();
        let days = month.days();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].day(), 1);
        for pair in days.windows(2) {
            assert_eq!(
                pair[1].signed_duration_since(pair[0]).num_days(),
                1,
                "days must be exactly one apart: {:?}",
                pair
            );
        }
    }

    #[test]
    fn file_name_carries_the_token() {
        let month: MonthYear = "August2025".parse().unwrap();
        assert_eq!(month.file_name(), "August2025-INDECOMM-TIMESHEET");
    }
}
