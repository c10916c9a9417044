//! Run orchestration: iterate the rename table in declaration order, move
//! files, and collect the outcome.
//!
//! Per-entry policy: a missing source file is recorded and skipped; a move
//! that fails on both the atomic and fallback paths is recorded with its
//! error text and the remaining entries are still processed. Only the
//! startup source-directory check aborts the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::fs_ops::{force_extension, move_file, unique_destination_reserving};
use crate::report::{ActionRecord, FailedRecord};

/// Accumulated outcome of one run, in mapping-declaration order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub renamed: Vec<ActionRecord>,
    pub missing: Vec<String>,
    pub failed: Vec<FailedRecord>,
}

/// Drive the relocation over all configured entries.
///
/// `cfg.validate()` must have succeeded first (source checked, destination
/// created); this function only performs the per-entry work.
pub fn run(cfg: &Config) -> RunSummary {
    let mut summary = RunSummary::default();
    // Names claimed by earlier dry-run entries; real moves claim them on disk.
    let mut reserved: HashSet<PathBuf> = HashSet::new();

    for entry in &cfg.renames {
        let src = cfg.source_dir.join(&entry.from);
        if !src.exists() {
            debug!(name = %entry.from, "source file not found, recording as missing");
            summary.missing.push(entry.from.clone());
            continue;
        }

        let dest_name = force_extension(&entry.to, &cfg.target_ext);
        let dest = unique_destination_reserving(&cfg.dest_dir.join(&dest_name), &reserved);
        // the resolved name differs from the mapped one when suffixed
        let final_name = file_name_string(&dest);

        if cfg.dry_run {
            info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
            reserved.insert(dest);
            summary.renamed.push(ActionRecord {
                from: entry.from.clone(),
                to: final_name,
            });
            continue;
        }

        match move_file(&src, &dest) {
            Ok(()) => summary.renamed.push(ActionRecord {
                from: entry.from.clone(),
                to: final_name,
            }),
            Err(e) => {
                warn!(name = %entry.from, error = %e, "move failed, continuing with remaining entries");
                summary.failed.push(FailedRecord {
                    name: entry.from.clone(),
                    error: format!("{e:#}"),
                });
            }
        }
    }

    summary
}

fn file_name_string(p: &Path) -> String {
    p.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
