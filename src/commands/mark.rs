use anyhow::Result;
use owo_colors::OwoColorize;

use timesheet_core::local::LocalStore;
use timesheet_core::{
    DayCell, LeaveType, MarkMode, MonthYear, TimesheetAction, click_patch, reduce, summarize,
};

use crate::render;

pub fn run(store: &LocalStore, day: u32, month: MonthYear) -> Result<()> {
    let state = store.load_or_init(month);
    let Some((row, col)) = state.find_day(day) else {
        anyhow::bail!("Day {day} is not part of {}", month.label());
    };
    // find_day only returns in-bounds positions
    let cell = *state.cell(row, col).unwrap();

    let Some(patch) = click_patch(state.mark_mode, &cell, col) else {
        let reason = match state.mark_mode {
            MarkMode::Leaves => "weekends and holidays can't take leave marks",
            MarkMode::Holiday => "weekends and leave-marked days can't become holidays",
        };
        println!("{}", format!("No change: {reason}.").dimmed());
        return Ok(());
    };

    let after = reduce(&state, TimesheetAction::SetValues { row, col, patch });
    store.save_marks(month, &after)?;

    let updated = after.cell(row, col).unwrap();
    println!("{} {}", format!("{day} {}", month.month_name()).bold(), describe(updated));
    println!();
    println!("{}", render::render_calendar(&after, month));
    println!();
    println!("{}", render::render_summary(&summarize(&after.calendar_rows)));
    Ok(())
}

fn describe(cell: &DayCell) -> &'static str {
    if cell.is_holiday {
        return "marked as holiday";
    }
    match cell.leave_type {
        LeaveType::Half => "marked as half day leave",
        LeaveType::Full => "marked as full day leave",
        LeaveType::None => "cleared",
    }
}
