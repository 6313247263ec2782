use anyhow::Result;
use owo_colors::OwoColorize;

use timesheet_core::local::LocalStore;
use timesheet_core::remote::{UploadContext, ensure_spreadsheet, submit_upload};
use timesheet_core::session::{SessionAction, SessionState, reduce_session};
use timesheet_core::{MonthYear, TimesheetError, UploadStatus};
use timesheet_google::GoogleHub;

use crate::render;

/// First sheet of a spreadsheet, the one `spreadsheets.create` assigns.
const DEFAULT_SHEET_ID: i64 = 0;

pub async fn run(hub: &GoogleHub, store: &LocalStore, month: MonthYear) -> Result<()> {
    let session = SessionState::new(month);
    let session = reduce_session(
        &session,
        SessionAction::SetProfileAll(store.load_profile()),
    );
    if !session.profile.is_complete() {
        println!(
            "{} {}",
            "Missing details (run `timesheet profile`):".yellow(),
            session.profile.missing().join(", ")
        );
    }

    let session = reduce_session(&session, SessionAction::SheetLoading);
    let spinner = render::create_spinner(format!("Locating spreadsheet for {}", month.label()));
    let ensured = ensure_spreadsheet(hub, month).await;
    spinner.finish_and_clear();

    let file = match ensured {
        Ok(file) => file,
        Err(TimesheetError::Auth(message)) => {
            println!("{}", message.red());
            return Ok(());
        }
        Err(_) => {
            println!("{}", render::FILE_CREATE_ERROR_MSG.red());
            return Ok(());
        }
    };
    let session = reduce_session(
        &session,
        SessionAction::SheetSuccess {
            id: file.id.clone(),
            name: file.name.clone(),
        },
    );
    println!("{}", render::render_file(&file));

    let state = store.load_or_init(month);
    let ctx = UploadContext {
        spreadsheet_id: file.id,
        sheet_id: DEFAULT_SHEET_ID,
        month,
        profile: session.profile.clone(),
    };

    let spinner = render::create_spinner("Uploading to Google Sheets".into());
    let after = submit_upload(hub, state, &ctx).await;
    spinner.finish_and_clear();
    store.save_marks(month, &after)?;

    match after.upload {
        UploadStatus::Success => println!("{}", render::UPLOAD_SUCCESS_MSG.green()),
        UploadStatus::Error => println!("{}", render::UPLOAD_ERROR_MSG.red()),
        UploadStatus::Loading | UploadStatus::Idle => {
            println!("{}", "An upload is already in progress.".yellow())
        }
    }
    Ok(())
}
