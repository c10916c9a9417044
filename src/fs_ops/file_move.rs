//! Single-file move.
//! Attempts atomic rename; on cross-filesystem or permission errors, falls
//! back to copy-then-delete, which works across volumes.

use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::atomic::try_atomic_move;
use super::copy::copy_then_delete;
use super::disk::check_disk_space;

/// Move `src` to the already-resolved `dest` path.
///
/// Callers resolve a collision-free destination first; this function never
/// overwrites. On success the source no longer exists and the destination
/// holds identical bytes.
pub fn move_file(src: &Path, dest: &Path) -> Result<()> {
    match try_atomic_move(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file atomically");
            Ok(())
        }
        Err(e) => {
            #[cfg(unix)]
            let hint: &str = match e
                .downcast_ref::<io::Error>()
                .and_then(|ioe| ioe.raw_os_error())
            {
                Some(code) if code == libc::EXDEV => "cross-filesystem; will copy instead",
                Some(code) if code == libc::EACCES || code == libc::EPERM => {
                    "permission denied; check destination perms"
                }
                _ => "falling back to copy",
            };

            #[cfg(not(unix))]
            let hint: &str = match e.downcast_ref::<io::Error>().map(|ioe| ioe.kind()) {
                Some(io::ErrorKind::PermissionDenied) => {
                    "permission denied; check destination perms"
                }
                _ => "falling back to copy",
            };

            warn!(error = %e, hint, "Atomic rename failed, using copy+delete");
            if let Some(dest_dir) = dest.parent() {
                check_disk_space(src, dest_dir)?;
            }
            copy_then_delete(src, dest)?;
            info!(src = %src.display(), dest = %dest.display(), "Moved file via fallback copy");
            Ok(())
        }
    }
}
