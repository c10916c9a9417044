//! Typed error definitions for cert_move.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertMoveError {
    #[error("Source directory not found: {0}")]
    SourceDirMissing(PathBuf),

    #[error("Source path is not a directory: {0}")]
    SourceNotADirectory(PathBuf),

    #[error("Destination exists but is not a directory: {0}")]
    DestNotADirectory(PathBuf),
}
