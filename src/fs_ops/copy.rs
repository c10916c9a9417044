//! Fallback move path for cross-volume destinations:
//! - Streams the source into a unique temp file in the destination directory
//!   (created with create_new, fsynced before the rename).
//! - Atomically renames temp -> dest, then deletes the source.

use anyhow::{Context, Result, anyhow};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::atomic::try_atomic_move;
use super::helpers::io_error_with_help;

/// Copy `src` into place at `dest` via a temp file, then remove `src`.
pub(super) fn copy_then_delete(src: &Path, dest: &Path) -> Result<()> {
    let dest_dir = dest
        .parent()
        .ok_or_else(|| anyhow!("destination has no parent: {}", dest.display()))?;

    fs::create_dir_all(dest_dir)
        .map_err(io_error_with_help("create destination directory", dest_dir))?;

    let tmp = unique_temp_path(dest_dir);
    if let Err(e) = copy_streaming(src, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error_with_help("copy to temporary file", &tmp)(e));
    }

    if let Err(e) = try_atomic_move(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| {
            format!(
                "rename temporary file '{}' -> '{}'",
                tmp.display(),
                dest.display()
            )
        });
    }

    fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
    Ok(())
}

/// Buffered copy that never clobbers (create_new) and fsyncs before returning.
fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    const BUF_SIZE: usize = 1024 * 1024;

    let reader = File::open(src)?;
    let writer = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, reader);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, writer);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    Ok(bytes)
}

/// Unique transient name inside `dir`; pid + millis keep concurrent runs apart.
fn unique_temp_path(dir: &Path) -> PathBuf {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    dir.join(format!(".cert_move.{}.{millis}.tmp", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_then_delete_moves_bytes() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.png");
        let dest_dir = td.path().join("out");
        fs::create_dir_all(&dest_dir).unwrap();
        let dest = dest_dir.join("b.png");
        fs::write(&src, b"certificate bytes").unwrap();

        copy_then_delete(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"certificate bytes");
    }

    #[test]
    fn temp_file_not_left_behind() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.png");
        let dest = td.path().join("out").join("b.png");
        fs::write(&src, b"x").unwrap();

        copy_then_delete(&src, &dest).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dest.parent().unwrap())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
