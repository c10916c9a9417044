//! Application orchestrator.
//! Loads/merges config, initializes logging, validates paths, runs the
//! relocation, prints the report, and persists the JSON run log.

use anyhow::Result;
use tracing::{debug, info};

use cert_move::config::{self, default_config_path};
use cert_move::output as out;
use cert_move::report::{self, RunLog};
use cert_move::runner;

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        if let Ok(cfg_env) = std::env::var("CERT_MOVE_CONFIG") {
            out::print_info(&format!("Using CERT_MOVE_CONFIG (explicit):\n  {}\n", cfg_env));
            out::print_info("To override, unset CERT_MOVE_CONFIG or set it to another file.");
            return Ok(());
        }
        match default_config_path() {
            Some(p) => {
                out::print_info(&format!("Default cert_move config path:\n  {}\n", p.display()));
                if p.exists() {
                    out::print_info("A config file already exists at that location.");
                } else {
                    out::print_info("No config file exists there yet. Run without --print-config to create a template.");
                }
            }
            None => {
                out::print_error("Could not determine a default config path.");
            }
        }
        return Ok(());
    }

    // Create template config if none exists (before logging init)
    if let Some(path) = config::ensure_default_config_exists() {
        out::print_success(&format!(
            "A template cert_move config was written to: {}",
            path.display()
        ));
        out::print_info("Edit the file to set `source_dir`, `dest_dir` and the <rename> table, then re-run. To use a different location set CERT_MOVE_CONFIG.");
        return Ok(());
    }

    // Build config (config file values first, CLI overrides win).
    let mut cfg = config::load_config()?.unwrap_or_default();
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!("Starting cert_move: {:?}", args);

    // Source is checked before any mutation; destination is created on success.
    // A missing source aborts here with a non-zero exit status.
    cfg.validate()?;

    let summary = runner::run(&cfg);
    let log = RunLog::new(
        &cfg.source_dir,
        &cfg.dest_dir,
        summary.renamed,
        summary.missing,
        summary.failed,
    );

    report::print_report(&log);

    if cfg.dry_run {
        out::print_info("Dry-run: no files were moved and no run log was written.");
    } else {
        let path = report::write_run_log(&cfg.dest_dir, &log)?;
        info!(
            log = %path.display(),
            renamed = log.renamed.len(),
            missing = log.missing.len(),
            failed = log.failed.len(),
            "Run complete"
        );
    }

    Ok(())
}
