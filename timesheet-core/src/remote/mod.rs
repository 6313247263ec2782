//! Remote spreadsheet interface and the flows built on it.
//!
//! The identity/storage provider is injected as a capability set rather than
//! referenced ambiently, so the pure core stays deterministic under test.

pub mod hub;
pub mod upload;

pub use hub::{AccountInfo, FileHandle, SheetsHub};
pub use upload::{UploadContext, ensure_spreadsheet, submit_upload};
