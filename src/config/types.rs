//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - RenameEntry is one declared (source name, destination name) pair.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{DEST_SUBDIR_DEFAULT, SOURCE_DIR_DEFAULT, TARGET_EXT_DEFAULT, paths};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// One declared rename: the filename to look up in the source directory and
/// the name it should carry in the destination directory.
///
/// Source names are unique keys; destination names may repeat across entries.
/// A repeated destination is resolved with a numeric suffix at move time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
}

impl RenameEntry {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Runtime configuration used by the relocator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the certificate images are picked up from
    pub source_dir: PathBuf,
    /// Directory the renamed images land in (created if missing)
    pub dest_dir: PathBuf,
    /// Declared renames, processed in declaration order
    pub renames: Vec<RenameEntry>,
    /// Extension forced onto every destination name (no leading dot)
    pub target_ext: String,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// If true, print actions but do not modify the filesystem
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        let source_dir = PathBuf::from(SOURCE_DIR_DEFAULT);
        let dest_dir = source_dir.join(DEST_SUBDIR_DEFAULT);
        Self {
            source_dir,
            dest_dir,
            renames: default_rename_table(),
            target_ext: TARGET_EXT_DEFAULT.to_string(),
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Construct a Config with explicit directories; other fields use defaults.
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            ..Default::default()
        }
    }
}

/// Built-in certificate rename table, used when the config file declares no
/// `<rename>` entries.
pub fn default_rename_table() -> Vec<RenameEntry> {
    [
        // typing.com
        ("1min.png", "typing_37wpm_2024.png"),
        ("1page-type.png", "typing_38wpm_2024.png"),
        // Simplilearn
        ("Agile Scrum Foundation.png", "agile_scrum_foundation_2025.png"),
        ("ai-agent.png", "ai_agent_beginners.png"),
        ("chatGTP -customer.png", "chatgpt_customer_support_2025.png"),
        // same target on purpose; the resolver suffixes the second one
        ("GTP for customer support.png", "chatgpt_customer_support_2025.png"),
        // Google / MIT RAISE
        ("genAI.png", "gen_ai_educators_google.png"),
        // ICT Olympiad
        ("ictOlympiad.png", "ict_olympiad_participant.png"),
        // Kaggle
        (
            "Md Abu Sufyan - Intro to Machine Learning.png",
            "kaggle_intro_ml_2024-06-30.png",
        ),
        (
            "Md Abu Sufyan - Intro to Machine Learning-2nd Time.png",
            "kaggle_intro_ml_2024-07-09.png",
        ),
        // Semiconductor
        ("Md Abu Sufyan Semicondutor.jpg", "semiconductor_2025.png"),
        // EDGE Laravel
        ("php-laravel.png", "edge_php_laravel_2025.png"),
        // Courses
        ("Prompt Engineering.png", "prompt_engineering_2025.png"),
        ("Python Crash Course.png", "python_crash_course.png"),
        // SDG Primer
        ("sdgPrimet.png", "sdg_primer_2025.png"),
        // IELTS speaking participant
        ("spoken.png", "ielts_speaking_module_2025.png"),
        // Workplace communication
        ("workplace.png", "workplace_communication_essentials_2024.png"),
    ]
    .into_iter()
    .map(|(from, to)| RenameEntry::new(from, to))
    .collect()
}
