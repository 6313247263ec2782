//! Google Drive/Sheets provider for the timesheet CLI.
//!
//! Implements `timesheet_core::remote::SheetsHub` over the REST APIs, and
//! owns OAuth credentials and tokens. The core never sees transport details.

pub mod api;
pub mod auth;
pub mod config;

pub use api::GoogleHub;
pub use config::GoogleCredentials;
