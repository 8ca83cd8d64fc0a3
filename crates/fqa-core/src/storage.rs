//! Disk writes for asset files.
//!
//! Every asset goes to `<name>.part` first and is renamed into place, so a
//! failed write never truncates or half-overwrites an existing file.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))
}

/// Sibling temp path for `path` (e.g. `seed.png` -> `seed.png.part`).
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Replace `path` with exactly `bytes`.
///
/// On error the temp file is removed and whatever was at `path` before is
/// left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp = temp_path_for(path);
    let result = write_temp(&temp, bytes).and_then(|()| {
        fs::rename(&temp, path).with_context(|| {
            format!("failed to rename {} -> {}", temp.display(), path.display())
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

fn write_temp(temp: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .with_context(|| format!("failed to create temp file: {}", temp.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", temp.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", temp.display()))?;
    Ok(())
}
