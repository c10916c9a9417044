//! Disk space check before the fallback copy (statvfs on Unix; no-op elsewhere).

use anyhow::Result;
use std::path::Path;

#[cfg(unix)]
pub(super) fn check_disk_space(src: &Path, dest_dir: &Path) -> Result<()> {
    use anyhow::bail;
    use std::ffi::CString;
    use std::os::unix::fs::MetadataExt;

    let needed: u128 = std::fs::metadata(src)?.size() as u128;

    let dest_c = CString::new(dest_dir.to_string_lossy().into_owned()).map_err(|e| {
        anyhow::anyhow!("Invalid destination path '{}': {}", dest_dir.display(), e)
    })?;
    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(dest_c.as_ptr(), &mut stat) };
    if rc != 0 {
        bail!("Failed to stat filesystem for {}", dest_dir.display());
    }
    let available: u128 = (stat.f_bavail as u128).saturating_mul(stat.f_frsize as u128);
    if needed > available {
        bail!(
            "Insufficient space on destination: need {} bytes, have {} bytes",
            needed,
            available
        );
    }
    Ok(())
}

#[cfg(not(unix))]
pub(super) fn check_disk_space(_src: &Path, _dest_dir: &Path) -> Result<()> {
    // Not implemented on non-Unix platforms.
    Ok(())
}
