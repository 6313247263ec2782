//! Colored terminal rendering for grids, summaries, and messages.

use chrono::Datelike;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use timesheet_core::calendar::is_weekend_column;
use timesheet_core::remote::FileHandle;
use timesheet_core::{LeaveType, MarkMode, MonthYear, Summary, TimesheetState};

// Static user-facing messages; remote failures never surface more detail.
pub const AUTH_ERROR_MSG: &str = "Authorization error. Please try again.";
pub const FILE_ERROR_MSG: &str = "Error loading file name. Please try again later.";
pub const FILE_CREATE_ERROR_MSG: &str =
    "Unknown error occurred while creating a file in Google Drive. Please try again later.";
pub const UPLOAD_SUCCESS_MSG: &str = "Successfully uploaded. Check your Google Drive!";
pub const UPLOAD_ERROR_MSG: &str = "Failed to upload. Please try again.";
pub const LOGGED_OUT_MSG: &str = "You're logged out. Run `timesheet auth` to sign in with Google.";

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[".  ", ".. ", "...", " ..", "  .", "   "])
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}

/// The month grid: one line per week, Sunday first. Half-day marks render
/// yellow, full-day red, weekends and holidays dim.
pub fn render_calendar(state: &TimesheetState, month: MonthYear) -> String {
    let mut lines = vec![
        month.label().bold().to_string(),
        " S  M  T  W  T  F  S".dimmed().to_string(),
    ];

    for week in &state.calendar_rows {
        let cells: Vec<String> = week
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let Some(date) = cell.date else {
                    return "  ".to_string();
                };
                let day = format!("{:>2}", date.day());
                if is_weekend_column(col) || cell.is_holiday {
                    day.dimmed().to_string()
                } else {
                    match cell.leave_type {
                        LeaveType::Half => day.yellow().to_string(),
                        LeaveType::Full => day.red().to_string(),
                        LeaveType::None => day,
                    }
                }
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.push(format!(
        "{}  {}  {}",
        "half day".yellow(),
        "full day".red(),
        "weekend/holiday".dimmed(),
    ));
    lines.join("\n")
}

pub fn render_mode(mode: MarkMode) -> String {
    match mode {
        MarkMode::Leaves => "Marking days for: leaves".to_string(),
        MarkMode::Holiday => "Marking days for: holiday".to_string(),
    }
}

pub fn render_summary(summary: &Summary) -> String {
    [
        "Summary".bold().to_string(),
        format!("  Total number of working days  {}", summary.working),
        format!("  Total leaves                  {}", summary.leaves),
        format!("  Billable days                 {}", summary.billable),
    ]
    .join("\n")
}

pub fn render_file(file: &FileHandle) -> String {
    format!(
        "File name: {}\n  {}",
        file.name.bold(),
        file.url().dimmed()
    )
}
