//! The capability set the app needs from the identity/storage provider.

use serde::{Deserialize, Serialize};

use crate::error::TimesheetResult;
use crate::sheets::Request;

const SHEET_URL_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// A Drive file located or created for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub id: String,
    pub name: String,
}

impl FileHandle {
    /// Browser link to the spreadsheet.
    pub fn url(&self) -> String {
        format!("{SHEET_URL_BASE}{}/edit", self.id)
    }
}

/// The signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub username: String,
    pub email: String,
}

/// Everything the core asks of the provider: sign-in/out, file lookup and
/// creation, and the batch update. Implementations own credentials and
/// transport; the core never sees either.
#[allow(async_fn_in_trait)]
pub trait SheetsHub {
    async fn sign_in(&self) -> TimesheetResult<AccountInfo>;

    async fn sign_out(&self) -> TimesheetResult<()>;

    /// Look a file up by exact name; `None` when it does not exist.
    async fn list_files(&self, name: &str) -> TimesheetResult<Option<FileHandle>>;

    async fn create_spreadsheet(&self, title: &str) -> TimesheetResult<FileHandle>;

    /// Send one batch update. Success or failure only; no partial results.
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[Request],
    ) -> TimesheetResult<()>;
}
