//! CLI definition and parsing.
//! CLI flags override config values (which are loaded from XML if present).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use cert_move::config::{Config, DEST_SUBDIR_DEFAULT, LogLevel};

/// CLI wrapper for the cert_move library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename and relocate certificate images by mapping table (Rust)"
)]
pub struct Args {
    /// Override the source directory the images are read from.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the source directory")]
    pub source_dir: Option<PathBuf>,

    /// Override the destination directory the renamed images land in.
    /// Without this flag, overriding the source keeps the nested `certs/` layout.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Override the destination directory")]
    pub dest_dir: Option<PathBuf>,

    /// Extension forced onto every destination name (normally png).
    #[arg(long, help = "Force this extension onto destination names")]
    pub target_ext: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where cert_move will look for the config file (or CERT_MOVE_CONFIG if set), then exit.
    #[arg(
        long,
        help = "Print the config file location used by cert_move and exit"
    )]
    pub print_config: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.source_dir {
            cfg.source_dir = dir.clone();
            if self.dest_dir.is_none() {
                cfg.dest_dir = cfg.source_dir.join(DEST_SUBDIR_DEFAULT);
            }
        }
        if let Some(dir) = &self.dest_dir {
            cfg.dest_dir = dir.clone();
        }
        if let Some(ext) = &self.target_ext {
            cfg.target_ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
