//! On-disk cache for profile fields and per-month mark state.
//!
//! The profile is read once at startup and written on explicit save; mark
//! state is keyed by month token. Missing or malformed content falls back
//! to defaults and is never surfaced as an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{TimesheetError, TimesheetResult};
use crate::month::MonthYear;
use crate::profile::ProfileFields;
use crate::state::TimesheetState;

const PROFILE_FILE: &str = "profile.json";
const MARKS_DIR: &str = "marks";

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Store rooted at the platform config directory.
    pub fn open() -> TimesheetResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| TimesheetError::Config("Could not determine config directory".into()))?
            .join("timesheet");
        Ok(LocalStore { dir })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        LocalStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_profile(&self) -> ProfileFields {
        read_json(&self.dir.join(PROFILE_FILE)).unwrap_or_default()
    }

    pub fn save_profile(&self, profile: &ProfileFields) -> TimesheetResult<()> {
        write_json(&self.dir.join(PROFILE_FILE), profile)
    }

    pub fn load_marks(&self, month: MonthYear) -> Option<TimesheetState> {
        let mut state: TimesheetState = read_json(&self.marks_path(month))?;
        // Loading is an in-process flag; it never survives a restart.
        if state.upload.is_loading() {
            state.upload = crate::state::UploadStatus::Idle;
        }
        Some(state)
    }

    pub fn save_marks(&self, month: MonthYear, state: &TimesheetState) -> TimesheetResult<()> {
        write_json(&self.marks_path(month), state)
    }

    /// Saved state for the month, or a fresh unmarked grid.
    pub fn load_or_init(&self, month: MonthYear) -> TimesheetState {
        self.load_marks(month)
            .unwrap_or_else(|| TimesheetState::for_month(month))
    }

    fn marks_path(&self, month: MonthYear) -> PathBuf {
        self.dir.join(MARKS_DIR).join(format!("{month}.json"))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> TimesheetResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| TimesheetError::Serialization(e.to_string()))?;

    let temp = path.with_extension("json.tmp");
    fs::write(&temp, content)?;
    fs::rename(&temp, path)?;
    Ok(())
}
