//! Client credentials for the Google APIs.

use std::path::PathBuf;

use serde::Deserialize;

use timesheet_core::error::{TimesheetError, TimesheetResult};

/// OAuth client credentials, read from `google.toml` under the app config
/// directory. Tokens are stored separately by the auth module.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Directory holding credentials and tokens.
pub fn config_dir() -> TimesheetResult<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| TimesheetError::Config("Could not determine config directory".into()))?
        .join("timesheet");
    Ok(dir)
}

impl GoogleCredentials {
    pub fn config_path() -> TimesheetResult<PathBuf> {
        Ok(config_dir()?.join("google.toml"))
    }

    pub fn load() -> TimesheetResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Err(TimesheetError::Config(format!(
                "No Google credentials found. Create {} with:\n  \
                 client_id = \"...\"\n  \
                 client_secret = \"...\"",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| TimesheetError::Config(e.to_string()))
    }
}
