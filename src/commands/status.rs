use anyhow::Result;
use owo_colors::OwoColorize;

use timesheet_core::local::LocalStore;
use timesheet_core::remote::{FileHandle, SheetsHub};
use timesheet_core::session::{SessionAction, SessionState, reduce_session};
use timesheet_core::{MonthYear, TimesheetError, summarize};
use timesheet_google::GoogleHub;

use crate::render;

pub async fn run(store: &LocalStore, month: MonthYear) -> Result<()> {
    let session = SessionState::new(month);
    let session = reduce_session(
        &session,
        SessionAction::SetProfileAll(store.load_profile()),
    );

    let state = store.load_or_init(month);
    println!("{}", render::render_calendar(&state, month));
    println!("{}", render::render_mode(state.mark_mode).dimmed());
    println!();
    println!("{}", render::render_summary(&summarize(&state.calendar_rows)));
    println!();

    if !session.profile.is_complete() {
        println!(
            "{} {}",
            "Missing details (run `timesheet profile`):".yellow(),
            session.profile.missing().join(", ")
        );
    }

    // Remote part is read-only here; `upload` is what creates the file.
    let hub = match GoogleHub::from_config() {
        Ok(hub) => hub,
        Err(TimesheetError::Config(_)) => {
            println!(
                "{}",
                "Google is not configured; showing local state only.".dimmed()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let session = reduce_session(&session, SessionAction::SheetLoading);
    let spinner = render::create_spinner("Looking up the Drive file".into());
    let lookup = hub.list_files(&month.file_name()).await;
    spinner.finish_and_clear();

    let session = match lookup {
        Ok(Some(file)) => reduce_session(
            &session,
            SessionAction::SheetSuccess {
                id: file.id,
                name: file.name,
            },
        ),
        Ok(None) => session,
        Err(TimesheetError::Auth(_)) => {
            println!("{}", render::LOGGED_OUT_MSG.yellow());
            return Ok(());
        }
        Err(_) => reduce_session(&session, SessionAction::SheetError),
    };

    if session.sheet.error {
        println!("{}", render::FILE_ERROR_MSG.red());
    } else if session.sheet.id.is_empty() {
        println!(
            "{}",
            "No spreadsheet yet for this month. Run `timesheet upload` to create one.".dimmed()
        );
    } else {
        let file = FileHandle {
            id: session.sheet.id.clone(),
            name: session.sheet.name.clone(),
        };
        println!("{}", render::render_file(&file));
    }
    Ok(())
}
