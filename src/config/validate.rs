//! Config validation logic.
//! Verifies the source directory before any filesystem mutation, then creates
//! and probes the destination directory.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::CertMoveError;

use super::types::Config;

impl Config {
    /// Validate existence, readability/writability and canonical paths.
    ///
    /// Order matters: the source directory is checked first, and the
    /// destination is only created once that check has passed. A missing
    /// source therefore never leaves a freshly created destination behind.
    pub fn validate(&self) -> Result<()> {
        let src = &self.source_dir;
        let dst = &self.dest_dir;

        // 1) Source dir: must exist, be a directory, and be readable.
        //    Typed errors so the CLI can report them distinctly.
        if !src.exists() {
            error!("source_dir does not exist: {}", src.display());
            return Err(CertMoveError::SourceDirMissing(src.clone()).into());
        }
        if !src.is_dir() {
            error!("source_dir is not a directory: {}", src.display());
            return Err(CertMoveError::SourceNotADirectory(src.clone()).into());
        }
        fs::read_dir(src).with_context(|| {
            format!(
                "Cannot read source_dir '{}'; check permissions",
                src.display()
            )
        })?;
        debug!("source_dir readable: {}", src.display());

        // 2) Destination: must be a directory; create if missing; ensure writable.
        if dst.exists() && !dst.is_dir() {
            error!("dest_dir exists but isn't a directory: {}", dst.display());
            return Err(CertMoveError::DestNotADirectory(dst.clone()).into());
        }
        if self.dry_run {
            info!("dry-run: skipping destination creation and write probe");
        } else {
            if !dst.exists() {
                fs::create_dir_all(dst).with_context(|| {
                    format!("Failed to create dest_dir '{}'", dst.display())
                })?;
                info!("Created dest_dir: {}", dst.display());
            }
            is_writable_probe(dst).with_context(|| {
                format!("Cannot write to dest_dir '{}'; check permissions", dst.display())
            })?;
            debug!("dest_dir writable: {}", dst.display());
        }

        // 3) Resolve symlinks and reject identical paths. Nesting is fine:
        //    the default layout puts dest_dir inside source_dir.
        let src_real = fs::canonicalize(src).unwrap_or_else(|_| src.clone());
        let dst_real = fs::canonicalize(dst).unwrap_or_else(|_| dst.clone());
        if src_real == dst_real {
            bail!(
                "source_dir and dest_dir resolve to the same path: '{}'",
                src_real.display()
            );
        }

        info!(
            "Config validated: source='{}' dest='{}' entries={}",
            src.display(),
            dst.display(),
            self.renames.len()
        );
        Ok(())
    }
}

/// Quick writable probe: create and remove a small file in `dir`.
/// Uses create_new to avoid clobbering existing files.
fn is_writable_probe(dir: &Path) -> io::Result<()> {
    let probe = dir.join(format!(".cert_move_probe_{}.tmp", std::process::id()));
    match fs::OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&probe)
    {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
