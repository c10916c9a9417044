//! Core library for `cert_move`.
//!
//! Renames and relocates certificate images from a source directory into a
//! destination directory according to a configured mapping table. The library
//! holds config loading, collision-safe move primitives, the run orchestrator
//! and reporting; the binary adds CLI parsing and tracing setup on top.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod report;
pub mod runner;

pub use config::{Config, LogLevel, RenameEntry};
pub use errors::CertMoveError;
pub use report::{ActionRecord, FailedRecord, RUN_LOG_FILENAME, RunLog};
pub use runner::{RunSummary, run};
