//! Single authoritative state container for the calendar selector.
//!
//! All mutation goes through [`reduce`]; the click-to-patch policy decides
//! what, if anything, a click on a cell changes before an action is built.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{DayCell, LeaveType, WeekRow, calendar_rows, is_weekend_column};
use crate::month::MonthYear;

/// Which attribute a cell click currently edits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkMode {
    #[default]
    Leaves,
    Holiday,
}

/// Tracks the one in-flight batch-update call. There is no queuing and no
/// cancellation; a new submit while loading is suppressed at the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, UploadStatus::Loading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesheetState {
    pub mark_mode: MarkMode,
    pub date_range: Vec<NaiveDate>,
    pub calendar_rows: Vec<WeekRow>,
    pub upload: UploadStatus,
}

impl TimesheetState {
    /// Fresh state for a month: full date range, unmarked grid, idle upload.
    pub fn for_month(month: MonthYear) -> Self {
        let date_range = month.days();
        let calendar_rows = calendar_rows(&date_range);
        TimesheetState {
            mark_mode: MarkMode::default(),
            date_range,
            calendar_rows,
            upload: UploadStatus::default(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&DayCell> {
        self.calendar_rows.get(row)?.get(col)
    }

    /// Locate the grid position holding the given day-of-month.
    pub fn find_day(&self, day: u32) -> Option<(usize, usize)> {
        for (r, week) in self.calendar_rows.iter().enumerate() {
            for (c, cell) in week.iter().enumerate() {
                if cell.date.is_some_and(|d| d.day() == day) {
                    return Some((r, c));
                }
            }
        }
        None
    }
}

/// Partial-field update applied to exactly one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPatch {
    pub leave_type: Option<LeaveType>,
    pub is_holiday: Option<bool>,
}

impl CellPatch {
    fn apply(&self, cell: DayCell) -> DayCell {
        DayCell {
            date: cell.date,
            is_holiday: self.is_holiday.unwrap_or(cell.is_holiday),
            leave_type: self.leave_type.unwrap_or(cell.leave_type),
        }
    }
}

#[derive(Debug, Clone)]
pub enum TimesheetAction {
    SetMarkMode(MarkMode),
    /// Wholesale grid replacement on month change; discards prior edits.
    SetDates {
        date_range: Vec<NaiveDate>,
        calendar_rows: Vec<WeekRow>,
    },
    SetValues {
        row: usize,
        col: usize,
        patch: CellPatch,
    },
    UploadLoading,
    UploadSuccess,
    UploadFailure,
}

/// Pure transition function. `SetValues` rebuilds only the touched row and
/// cell; every other row passes through unchanged by value.
pub fn reduce(state: &TimesheetState, action: TimesheetAction) -> TimesheetState {
    match action {
        TimesheetAction::SetMarkMode(mode) => TimesheetState {
            mark_mode: mode,
            ..state.clone()
        },
        TimesheetAction::SetDates {
            date_range,
            calendar_rows,
        } => TimesheetState {
            date_range,
            calendar_rows,
            ..state.clone()
        },
        TimesheetAction::SetValues { row, col, patch } => {
            let rows = state
                .calendar_rows
                .iter()
                .enumerate()
                .map(|(r, week)| {
                    if r != row {
                        return *week;
                    }
                    let mut week = *week;
                    if let Some(cell) = week.get_mut(col) {
                        *cell = patch.apply(*cell);
                    }
                    week
                })
                .collect();
            TimesheetState {
                calendar_rows: rows,
                ..state.clone()
            }
        }
        TimesheetAction::UploadLoading => TimesheetState {
            upload: UploadStatus::Loading,
            ..state.clone()
        },
        TimesheetAction::UploadSuccess => TimesheetState {
            upload: UploadStatus::Success,
            ..state.clone()
        },
        TimesheetAction::UploadFailure => TimesheetState {
            upload: UploadStatus::Error,
            ..state.clone()
        },
    }
}

/// Decide what a click on `cell` at `col` changes in the given mode.
///
/// Weekend columns and padding cells never mutate. In leaves mode a holiday
/// cell is untouchable and the leave mark cycles none → half → full → none.
/// In holiday mode any leave mark blocks the toggle; a holiday mark does not
/// block a holiday un-toggle. The asymmetry is intentional and load-bearing:
/// a cell with a leave mark can never become a holiday, while a holiday cell
/// simply ignores leave clicks.
pub fn click_patch(mode: MarkMode, cell: &DayCell, col: usize) -> Option<CellPatch> {
    if is_weekend_column(col) || !cell.is_real() {
        return None;
    }
    match mode {
        MarkMode::Leaves => {
            if cell.is_holiday {
                return None;
            }
            let next = match cell.leave_type {
                LeaveType::None => LeaveType::Half,
                LeaveType::Half => LeaveType::Full,
                LeaveType::Full => LeaveType::None,
            };
            Some(CellPatch {
                leave_type: Some(next),
                is_holiday: None,
            })
        }
        MarkMode::Holiday => {
            if cell.leave_type.is_marked() {
                return None;
            }
            Some(CellPatch {
                leave_type: None,
                is_holiday: Some(!cell.is_holiday),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(token: &str) -> TimesheetState {
        TimesheetState::for_month(token.parse().unwrap())
    }

    fn click(state: &TimesheetState, row: usize, col: usize) -> TimesheetState {
        let cell = state.cell(row, col).copied().unwrap();
        match click_patch(state.mark_mode, &cell, col) {
            Some(patch) => reduce(state, TimesheetAction::SetValues { row, col, patch }),
            None => state.clone(),
        }
    }

    #[test]
    fn weekend_columns_never_mutate() {
        let state = state_for("August2025");
        for mode in [MarkMode::Leaves, MarkMode::Holiday] {
            let state = reduce(&state, TimesheetAction::SetMarkMode(mode));
            for col in [0, 6] {
                let after = click(&state, 1, col);
                assert_eq!(after, state, "weekend click must be a no-op in {mode:?}");
            }
        }
    }

    #[test]
    fn padding_cells_never_mutate() {
        // September 2025: row 0 col 0 is a leading padding slot.
        let state = state_for("September2025");
        let cell = state.cell(0, 0).copied().unwrap();
        assert!(!cell.is_real());
        assert_eq!(click_patch(MarkMode::Holiday, &cell, 3), None);
    }

    #[test]
    fn leave_marks_cycle_in_three_clicks() {
        let state = state_for("August2025");
        let (row, col) = state.find_day(13).unwrap();

        let one = click(&state, row, col);
        assert_eq!(one.cell(row, col).unwrap().leave_type, LeaveType::Half);
        let two = click(&one, row, col);
        assert_eq!(two.cell(row, col).unwrap().leave_type, LeaveType::Full);
        let three = click(&two, row, col);
        assert_eq!(three.cell(row, col).unwrap().leave_type, LeaveType::None);
        assert_eq!(three, state, "three clicks return to the original state");
    }

    #[test]
    fn holiday_toggle_flips_and_restores() {
        let mut state = state_for("August2025");
        state.mark_mode = MarkMode::Holiday;
        let (row, col) = state.find_day(14).unwrap();

        let marked = click(&state, row, col);
        assert!(marked.cell(row, col).unwrap().is_holiday);
        let unmarked = click(&marked, row, col);
        assert!(!unmarked.cell(row, col).unwrap().is_holiday);
    }

    #[test]
    fn leave_mark_blocks_holiday_toggle() {
        let state = state_for("August2025");
        let (row, col) = state.find_day(20).unwrap();

        let with_leave = click(&state, row, col);
        let holiday_mode = reduce(&with_leave, TimesheetAction::SetMarkMode(MarkMode::Holiday));
        let after = click(&holiday_mode, row, col);
        assert!(
            !after.cell(row, col).unwrap().is_holiday,
            "a cell with a leave mark must never become a holiday"
        );
    }

    #[test]
    fn holiday_blocks_new_leave_marks() {
        let mut state = state_for("August2025");
        state.mark_mode = MarkMode::Holiday;
        let (row, col) = state.find_day(21).unwrap();

        let holiday = click(&state, row, col);
        let leaves_mode = reduce(&holiday, TimesheetAction::SetMarkMode(MarkMode::Leaves));
        let after = click(&leaves_mode, row, col);
        assert_eq!(after.cell(row, col).unwrap().leave_type, LeaveType::None);
    }

    #[test]
    fn set_values_touches_exactly_one_cell() {
        let state = state_for("August2025");
        let (row, col) = state.find_day(12).unwrap();
        let after = click(&state, row, col);

        for (r, week) in after.calendar_rows.iter().enumerate() {
            for (c, cell) in week.iter().enumerate() {
                if (r, c) == (row, col) {
                    assert_eq!(cell.leave_type, LeaveType::Half);
                } else {
                    assert_eq!(cell, &state.calendar_rows[r][c]);
                }
            }
        }
    }

    #[test]
    fn set_dates_replaces_the_grid_wholesale() {
        let state = state_for("August2025");
        let (row, col) = state.find_day(12).unwrap();
        let edited = click(&state, row, col);

        let september: MonthYear = "September2025".parse().unwrap();
        let days = september.days();
        let rows = crate::calendar::calendar_rows(&days);
        let switched = reduce(
            &edited,
            TimesheetAction::SetDates {
                date_range: days.clone(),
                calendar_rows: rows,
            },
        );

        assert_eq!(switched.date_range, days);
        assert!(
            switched
                .calendar_rows
                .iter()
                .flatten()
                .all(|c| c.leave_type == LeaveType::None && !c.is_holiday),
            "prior edits are discarded on month change"
        );
    }

    #[test]
    fn upload_transitions() {
        let state = state_for("August2025");
        let loading = reduce(&state, TimesheetAction::UploadLoading);
        assert!(loading.upload.is_loading());
        let done = reduce(&loading, TimesheetAction::UploadSuccess);
        assert_eq!(done.upload, UploadStatus::Success);
        let failed = reduce(&loading, TimesheetAction::UploadFailure);
        assert_eq!(failed.upload, UploadStatus::Error);
    }
}
