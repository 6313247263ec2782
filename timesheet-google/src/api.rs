//! Google Drive/Sheets REST calls implementing the remote interface.

use serde::{Deserialize, Serialize};

use timesheet_core::error::{TimesheetError, TimesheetResult};
use timesheet_core::remote::{AccountInfo, FileHandle, SheetsHub};
use timesheet_core::sheets::Request;

use crate::auth;
use crate::config::GoogleCredentials;

const DRIVE_API: &str = "https://www.googleapis.com/drive/v3";
const SHEETS_API: &str = "https://sheets.googleapis.com/v4";

/// Remote hub backed by the Drive and Sheets REST APIs.
pub struct GoogleHub {
    http: reqwest::Client,
    credentials: GoogleCredentials,
}

impl GoogleHub {
    pub fn new(credentials: GoogleCredentials) -> Self {
        GoogleHub {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    /// Hub configured from the credentials file under the app config dir.
    pub fn from_config() -> TimesheetResult<Self> {
        Ok(GoogleHub::new(GoogleCredentials::load()?))
    }

    async fn token(&self) -> TimesheetResult<String> {
        auth::access_token(&self.http, &self.credentials).await
    }
}

#[derive(Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpreadsheetResponse {
    spreadsheet_id: String,
    properties: SpreadsheetProperties,
}

#[derive(Deserialize)]
struct SpreadsheetProperties {
    #[serde(default)]
    title: String,
}

#[derive(Serialize)]
struct CreateSpreadsheetBody<'a> {
    properties: CreateProperties<'a>,
}

#[derive(Serialize)]
struct CreateProperties<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [Request],
}

impl SheetsHub for GoogleHub {
    async fn sign_in(&self) -> TimesheetResult<AccountInfo> {
        auth::sign_in(&self.http, &self.credentials).await
    }

    async fn sign_out(&self) -> TimesheetResult<()> {
        auth::sign_out()
    }

    async fn list_files(&self, name: &str) -> TimesheetResult<Option<FileHandle>> {
        let token = self.token().await?;
        let query = format!("name='{}'", name.replace('\'', "\\'"));

        let list: DriveFileList = self
            .http
            .get(format!("{DRIVE_API}/files"))
            .bearer_auth(token)
            .query(&[("q", query.as_str()), ("fields", "files(id,name)")])
            .send()
            .await
            .map_err(|e| TimesheetError::FileLookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| TimesheetError::FileLookup(e.to_string()))?
            .json()
            .await
            .map_err(|e| TimesheetError::FileLookup(e.to_string()))?;

        Ok(list
            .files
            .into_iter()
            .next()
            .map(|file| FileHandle {
                id: file.id,
                name: file.name,
            }))
    }

    async fn create_spreadsheet(&self, title: &str) -> TimesheetResult<FileHandle> {
        let token = self.token().await?;

        let created: SpreadsheetResponse = self
            .http
            .post(format!("{SHEETS_API}/spreadsheets"))
            .bearer_auth(token)
            .json(&CreateSpreadsheetBody {
                properties: CreateProperties { title },
            })
            .send()
            .await
            .map_err(|e| TimesheetError::FileCreate(e.to_string()))?
            .error_for_status()
            .map_err(|e| TimesheetError::FileCreate(e.to_string()))?
            .json()
            .await
            .map_err(|e| TimesheetError::FileCreate(e.to_string()))?;

        Ok(FileHandle {
            id: created.spreadsheet_id,
            name: created.properties.title,
        })
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[Request],
    ) -> TimesheetResult<()> {
        let token = self.token().await?;

        self.http
            .post(format!("{SHEETS_API}/spreadsheets/{spreadsheet_id}:batchUpdate"))
            .bearer_auth(token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await
            .map_err(|e| TimesheetError::Upload(e.to_string()))?
            .error_for_status()
            .map_err(|e| TimesheetError::Upload(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_body_wraps_the_request_array() {
        let requests: Vec<Request> = Vec::new();
        let value = serde_json::to_value(BatchUpdateBody {
            requests: &requests,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "requests": [] }));
    }

    #[test]
    fn create_body_sets_the_title_property() {
        let value = serde_json::to_value(CreateSpreadsheetBody {
            properties: CreateProperties {
                title: "August2025-INDECOMM-TIMESHEET",
            },
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "properties": { "title": "August2025-INDECOMM-TIMESHEET" }
            })
        );
    }
}
