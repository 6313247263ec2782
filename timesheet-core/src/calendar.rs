//! Calendar grid construction: fixed 7-column week rows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How much of a working day is taken as leave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    #[default]
    #[serde(rename = "")]
    None,
    Half,
    Full,
}

impl LeaveType {
    pub fn is_marked(&self) -> bool {
        !matches!(self, LeaveType::None)
    }

    /// Leave weight in days: half counts 0.5, full counts 1.
    pub fn weight(&self) -> f64 {
        match self {
            LeaveType::None => 0.0,
            LeaveType::Half => 0.5,
            LeaveType::Full => 1.0,
        }
    }
}

/// One grid slot: a real calendar day, or a padding slot (`date: None`)
/// aligning short first/last weeks.
///
/// Holiday and leave marks coexist in storage; rendering and the click
/// policy give holiday precedence, but a pre-existing leave mark is never
/// cleared by a holiday toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_holiday: bool,
    pub leave_type: LeaveType,
}

impl DayCell {
    pub fn for_date(date: NaiveDate) -> Self {
        DayCell {
            date: Some(date),
            is_holiday: false,
            leave_type: LeaveType::None,
        }
    }

    pub fn padding() -> Self {
        DayCell {
            date: None,
            is_holiday: false,
            leave_type: LeaveType::None,
        }
    }

    pub fn is_real(&self) -> bool {
        self.date.is_some()
    }
}

/// Exactly 7 cells, index 0..6 = Sunday..Saturday.
pub type WeekRow = [DayCell; 7];

/// Columns 0 (Sunday) and 6 (Saturday) are never editable.
pub fn is_weekend_column(col: usize) -> bool {
    col == 0 || col == 6
}

/// Lay the month's days into week rows: each date lands at its weekday
/// column, a row closes once Saturday is placed or the input runs out, and
/// unfilled slots stay as padding cells.
pub fn calendar_rows(days: &[NaiveDate]) -> Vec<WeekRow> {
    let mut rows = Vec::new();
    let mut row = [DayCell::padding(); 7];
    let mut row_has_days = false;

    for date in days {
        let col = date.weekday().num_days_from_sunday() as usize;
        row[col] = DayCell::for_date(*date);
        row_has_days = true;
        if col == 6 {
            rows.push(row);
            row = [DayCell::padding(); 7];
            row_has_days = false;
        }
    }
    if row_has_days {
        rows.push(row);
    }
    rows
}

/// Count of real (non-padding) cells across the grid.
pub fn real_day_count(rows: &[WeekRow]) -> usize {
    rows.iter().flatten().filter(|cell| cell.is_real()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::MonthYear;

    fn rows_for(token: &str) -> Vec<WeekRow> {
        let month: MonthYear = token.parse().unwrap();
        calendar_rows(&month.days())
    }

    #[test]
    fn rows_are_always_seven_wide() {
        // WeekRow is a fixed-size array; what matters is that every month
        // produces at least 5 rows of it and nothing panics at boundaries.
        for token in ["February2025", "August2025", "December2025", "February2024"] {
            let rows = rows_for(token);
            assert!(rows.len() >= 5, "{token} produced {} rows", rows.len());
        }
    }

    #[test]
    fn concatenating_real_cells_reproduces_the_day_sequence() {
        let month: MonthYear = "September2025".parse().unwrap();
        let days = month.days();
        let rows = calendar_rows(&days);

        let replayed: Vec<_> = rows
            .iter()
            .flatten()
            .filter_map(|cell| cell.date)
            .collect();
        assert_eq!(replayed, days);
    }

    #[test]
    fn first_and_last_rows_are_padded() {
        // September 2025 starts on a Monday and ends on a Tuesday.
        let rows = rows_for("September2025");
        let first = rows.first().unwrap();
        let last = rows.last().unwrap();

        assert!(first[0].date.is_none(), "Sunday slot before the 1st pads");
        assert_eq!(first[1].date.unwrap().day(), 1);
        assert_eq!(last[2].date.unwrap().day(), 30);
        for cell in &last[3..] {
            assert!(cell.date.is_none(), "slots after the 30th pad");
        }
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_padding() {
        // June 2025 starts on a Sunday.
        let rows = rows_for("June2025");
        assert_eq!(rows[0][0].date.unwrap().day(), 1);
    }

    #[test]
    fn every_cell_starts_unmarked() {
        for row in rows_for("August2025") {
            for cell in row {
                assert!(!cell.is_holiday);
                assert_eq!(cell.leave_type, LeaveType::None);
            }
        }
    }

    #[test]
    fn leave_type_serializes_like_the_stored_form() {
        assert_eq!(serde_json::to_string(&LeaveType::None).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&LeaveType::Half).unwrap(), "\"half\"");
        assert_eq!(serde_json::to_string(&LeaveType::Full).unwrap(), "\"full\"");
    }
}
