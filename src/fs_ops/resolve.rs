//! Destination-name resolution.
//! - `force_extension` normalizes a mapped name to the configured target type.
//! - `unique_destination` returns a path that does not currently exist,
//!   appending `_2`, `_3`, ... to the stem until one is free.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Replace (or add) the extension of a bare filename.
/// Destination names always carry the configured target extension, no matter
/// what extension the mapping (or the source file) declared.
pub fn force_extension(name: &str, ext: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let ext = ext.trim_start_matches('.');
    format!("{stem}.{ext}")
}

/// Return a path guaranteed not to exist at resolution time.
///
/// The candidate wins if it is free; otherwise `_2`, `_3`, ... are appended
/// to the stem (before the extension) until a free name is found. This is
/// purely a lookup: nothing is created or reserved, so a concurrent writer
/// could still claim the returned path before the caller uses it.
pub fn unique_destination(candidate: &Path) -> PathBuf {
    unique_destination_reserving(candidate, &HashSet::new())
}

/// Like `unique_destination`, but additionally treats every path in
/// `reserved` as taken. Dry-run uses this so entries that would have
/// claimed a name on disk still push later duplicates onto `_2`, `_3`, ...
pub fn unique_destination_reserving(candidate: &Path, reserved: &HashSet<PathBuf>) -> PathBuf {
    let taken = |p: &Path| p.exists() || reserved.contains(p);

    if !taken(candidate) {
        return candidate.to_path_buf();
    }

    let stem = candidate
        .file_stem()
        .map(|s| s.to_owned())
        .unwrap_or_else(|| OsString::from("file"));
    let ext = candidate.extension().map(|e| e.to_owned());

    let mut n: u64 = 2;
    loop {
        let mut name = OsString::new();
        name.push(&stem);
        name.push(format!("_{n}"));
        if let Some(ref e) = ext {
            name.push(".");
            name.push(e);
        }
        let alt = candidate.with_file_name(&name);
        if !taken(&alt) {
            return alt;
        }
        if n == 4 {
            trace!(candidate = %candidate.display(), "several suffixed names taken, continuing the search");
        }
        n += 1;
    }
}
