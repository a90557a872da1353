//! The persistence layer: typed configuration values as JSON files.
//!
//! `sync_` holds the blocking variants; `async_` holds the `tokio::fs`
//! variants and is only compiled with the `async` feature. Both share the
//! same contract: a missing file reads as `Ok(None)`, a non-empty
//! password routes the file text through [`crate::encryption`], and a
//! caller-supplied validator can veto a loaded value.

pub mod sync_;

#[cfg(feature = "async")]
pub mod async_;
