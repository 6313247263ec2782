//! Core types and pure logic for the timesheet ecosystem.
//!
//! This crate provides everything the CLI and providers share:
//! - the month token, calendar grid model, and its reducer
//! - summary aggregation (working / leave / billable days)
//! - the Sheets batch-update request builder
//! - the `remote` capability interface implemented by providers
//! - the on-disk profile and mark-state cache

pub mod calendar;
pub mod error;
pub mod local;
pub mod month;
pub mod profile;
pub mod remote;
pub mod session;
pub mod sheets;
pub mod state;
pub mod summary;

// Re-export the types nearly every consumer touches
pub use calendar::{DayCell, LeaveType, WeekRow, calendar_rows};
pub use error::{TimesheetError, TimesheetResult};
pub use month::MonthYear;
pub use profile::{ProfileField, ProfileFields};
pub use state::{MarkMode, TimesheetAction, TimesheetState, UploadStatus, click_patch, reduce};
pub use summary::{Summary, summarize};
