//! Run reporting: the console summary and the persisted JSON run log.

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output as out;

/// Name of the JSON log written into the destination directory each run.
/// The file is fully overwritten, never appended.
pub const RUN_LOG_FILENAME: &str = "rename_log.json";

/// One successful move: the source name found and the destination name used
/// (which may carry a numeric suffix when the mapped name collided).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    pub from: String,
    pub to: String,
}

/// One entry whose move failed on both the atomic and the fallback path.
#[derive(Debug, Clone, Serialize)]
pub struct FailedRecord {
    pub name: String,
    pub error: String,
}

/// Aggregate outcome of a run, persisted as JSON into the destination directory.
#[derive(Debug, Serialize)]
pub struct RunLog {
    pub src_dir: String,
    pub dst_dir: String,
    pub renamed: Vec<ActionRecord>,
    pub missing: Vec<String>,
    pub failed: Vec<FailedRecord>,
    pub timestamp: String,
}

impl RunLog {
    /// Build a log stamped with the current local time (second precision).
    pub fn new(
        src_dir: &Path,
        dst_dir: &Path,
        renamed: Vec<ActionRecord>,
        missing: Vec<String>,
        failed: Vec<FailedRecord>,
    ) -> Self {
        Self {
            src_dir: src_dir.display().to_string(),
            dst_dir: dst_dir.display().to_string(),
            renamed,
            missing,
            failed,
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Overwrite the run log inside `dest_dir`; returns the path written.
pub fn write_run_log(dest_dir: &Path, log: &RunLog) -> Result<PathBuf> {
    let path = dest_dir.join(RUN_LOG_FILENAME);
    let body = serde_json::to_string_pretty(log).context("serialize run log")?;
    fs::write(&path, body).with_context(|| format!("write run log '{}'", path.display()))?;
    Ok(path)
}

/// Print the human-readable report sections to the console.
pub fn print_report(log: &RunLog) {
    out::print_user("Renamed/moved files:");
    for a in &log.renamed {
        out::print_user(&format!("- {} -> {}", a.from, a.to));
    }

    if !log.missing.is_empty() {
        out::print_user("");
        out::print_user("Missing files (not found in source folder):");
        for m in &log.missing {
            out::print_user(&format!("- {m}"));
        }
    }

    if !log.failed.is_empty() {
        out::print_user("");
        out::print_user("Failed moves:");
        for f in &log.failed {
            out::print_user(&format!("- {}: {}", f.name, f.error));
        }
    }
}
