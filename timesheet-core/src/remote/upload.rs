//! Find-or-create and upload flows against a [`SheetsHub`].

use crate::error::TimesheetResult;
use crate::month::MonthYear;
use crate::profile::ProfileFields;
use crate::sheets::construct_requests;
use crate::state::{TimesheetAction, TimesheetState, reduce};
use crate::summary::summarize;

use super::hub::{FileHandle, SheetsHub};

/// Target identifiers and header inputs for one upload.
#[derive(Debug, Clone)]
pub struct UploadContext {
    pub spreadsheet_id: String,
    pub sheet_id: i64,
    pub month: MonthYear,
    pub profile: ProfileFields,
}

/// Resolve the month's spreadsheet: reuse the file if it already exists,
/// otherwise create it.
pub async fn ensure_spreadsheet(
    hub: &impl SheetsHub,
    month: MonthYear,
) -> TimesheetResult<FileHandle> {
    let name = month.file_name();
    if let Some(file) = hub.list_files(&name).await? {
        return Ok(file);
    }
    hub.create_spreadsheet(&name).await
}

/// Run one upload attempt through the reducer: suppressed while a previous
/// attempt is loading, otherwise loading → exactly one batch-update call →
/// success or failure. A failed attempt is terminal; retrying takes a fresh
/// trigger.
pub async fn submit_upload(
    hub: &impl SheetsHub,
    state: TimesheetState,
    ctx: &UploadContext,
) -> TimesheetState {
    if state.upload.is_loading() {
        return state;
    }
    let state = reduce(&state, TimesheetAction::UploadLoading);

    let summary = summarize(&state.calendar_rows);
    let requests = construct_requests(
        &state.calendar_rows,
        &summary,
        &ctx.profile,
        ctx.sheet_id,
        ctx.month,
    );

    match hub.batch_update(&ctx.spreadsheet_id, &requests).await {
        Ok(()) => reduce(&state, TimesheetAction::UploadSuccess),
        Err(_) => reduce(&state, TimesheetAction::UploadFailure),
    }
}
