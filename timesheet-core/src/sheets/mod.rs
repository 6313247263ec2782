//! Declarative Sheets batch-update operations.
//!
//! `types` mirrors the subset of the Sheets v4 `batchUpdate` JSON the app
//! emits; `build` compiles grid + summary + profile state into an ordered
//! request sequence. No I/O happens here.

pub mod build;
pub mod types;

pub use build::construct_requests;
pub use types::*;
