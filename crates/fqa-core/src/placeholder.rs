//! Placeholder image generator.
//!
//! Writes copies of a 1×1 transparent PNG so the app has something to load
//! before real artwork exists.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::catalog::AssetRecord;
use crate::{checksum, storage};

/// Number of placeholders written by default.
pub const DEFAULT_PLACEHOLDER_COUNT: usize = 3;

/// 1×1 RGBA PNG, fully transparent.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// `placeholder{index}.png`, numbered from 1.
pub fn placeholder_name(index: usize) -> String {
    format!("placeholder{index}.png")
}

pub fn placeholder_records(count: usize) -> Vec<AssetRecord> {
    (1..=count)
        .map(|i| AssetRecord::embedded(placeholder_name(i), PLACEHOLDER_PNG))
        .collect()
}

/// Write the default set of placeholders into `dir`.
pub fn generate(dir: &Path) -> Result<Vec<PathBuf>> {
    generate_n(dir, DEFAULT_PLACEHOLDER_COUNT)
}

/// Write `count` placeholders into `dir`, creating it if needed.
///
/// Stops at the first I/O error; there is no partial-success result.
pub fn generate_n(dir: &Path, count: usize) -> Result<Vec<PathBuf>> {
    storage::ensure_dir(dir)?;
    let digest = checksum::sha256_bytes(PLACEHOLDER_PNG);
    let mut written = Vec::with_capacity(count);
    for record in placeholder_records(count) {
        let path = dir.join(&record.filename);
        storage::write_atomic(&path, PLACEHOLDER_PNG)?;
        tracing::debug!(path = %path.display(), sha256 = %digest, "wrote placeholder");
        written.push(path);
    }
    tracing::info!(count, dir = %dir.display(), "placeholders written");
    Ok(written)
}
