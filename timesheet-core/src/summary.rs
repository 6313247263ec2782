//! Derived working/leave/billable statistics.

use serde::Serialize;

use crate::calendar::{WeekRow, is_weekend_column};

/// Derived from the grid on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub working: u32,
    pub leaves: f64,
    pub billable: f64,
}

/// A cell counts toward `working` iff it is real, not in a weekend column,
/// and not a holiday. Leave weight accumulates over every real cell
/// regardless of weekend/holiday status; that arithmetic is preserved as
/// defined behavior even where the click policy cannot produce it.
pub fn summarize(rows: &[WeekRow]) -> Summary {
    let mut working = 0u32;
    let mut leaves = 0.0f64;

    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            if !cell.is_real() {
                continue;
            }
            leaves += cell.leave_type.weight();
            if !is_weekend_column(col) && !cell.is_holiday {
                working += 1;
            }
        }
    }

    Summary {
        working,
        leaves,
        billable: f64::from(working) - leaves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Weekday};

    use crate::calendar::{DayCell, LeaveType, calendar_rows};

    /// One full Sunday..Saturday week (June 1st 2025 is a Sunday).
    fn single_week() -> Vec<WeekRow> {
        let sunday = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sun);
        let days: Vec<_> = (0..7)
            .map(|i| sunday + chrono::Duration::days(i))
            .collect();
        calendar_rows(&days)
    }

    #[test]
    fn empty_grid_counts_weekdays_only() {
        let rows = single_week();
        let summary = summarize(&rows);
        assert_eq!(summary.working, 5);
        assert_eq!(summary.leaves, 0.0);
        assert_eq!(summary.billable, 5.0);
    }

    #[test]
    fn full_leave_and_holiday_week() {
        // Wed full leave, Fri holiday: working = Mon,Tue,Wed,Thu = 4,
        // leaves = 1, billable = 3.
        let mut rows = single_week();
        rows[0][3].leave_type = LeaveType::Full;
        rows[0][5].is_holiday = true;

        let summary = summarize(&rows);
        assert_eq!(summary.working, 4);
        assert_eq!(summary.leaves, 1.0);
        assert_eq!(summary.billable, 3.0);
    }

    #[test]
    fn half_days_accumulate_in_halves() {
        let mut rows = single_week();
        rows[0][1].leave_type = LeaveType::Half;
        rows[0][2].leave_type = LeaveType::Half;
        rows[0][4].leave_type = LeaveType::Full;

        let summary = summarize(&rows);
        assert_eq!(summary.working, 5);
        assert_eq!(summary.leaves, 2.0);
        assert_eq!(summary.billable, 3.0);
    }

    #[test]
    fn leave_weight_counts_even_on_holiday_cells() {
        // Unreachable through the click policy, but defined behavior for
        // state that already carries both marks.
        let mut rows = single_week();
        rows[0][2].leave_type = LeaveType::Full;
        rows[0][2].is_holiday = true;

        let summary = summarize(&rows);
        assert_eq!(summary.working, 4, "holiday cell leaves working count");
        assert_eq!(summary.leaves, 1.0, "leave weight still counted");
    }

    #[test]
    fn padding_cells_contribute_nothing() {
        let mut rows = single_week();
        rows[0][0] = DayCell::padding();
        let summary = summarize(&rows);
        assert_eq!(summary.working, 5);
        assert_eq!(summary.leaves, 0.0);
    }

    #[test]
    fn unmarked_month_has_weekday_working_count() {
        let month: crate::month::MonthYear = "August2025".parse().unwrap();
        let rows = calendar_rows(&month.days());
        let weekdays = month
            .days()
            .iter()
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .count() as u32;

        let summary = summarize(&rows);
        assert_eq!(summary.working, weekdays);
        assert_eq!(summary.leaves, 0.0);
        assert_eq!(summary.billable, f64::from(weekdays));
    }
}
