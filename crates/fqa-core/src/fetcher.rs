//! Sequential asset fetcher.
//!
//! Walks a list of [`AssetRecord`]s in order, fetching each remote one with a
//! single blocking GET and writing the body into the destination directory.
//! A failed record is reported and skipped; it never aborts the run.

use anyhow::Result;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::{AssetRecord, AssetSource};
use crate::transport::Transport;
use crate::{checksum, storage};

/// Progress notifications emitted while fetching, one record at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<'a> {
    Started {
        filename: &'a str,
    },
    Saved {
        filename: &'a str,
        path: &'a Path,
        bytes: usize,
    },
    Failed {
        filename: &'a str,
        error: &'a str,
    },
}

/// A record that produced no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAsset {
    pub filename: String,
    pub error: String,
}

/// Outcome of one fetch run. Displays as `<succeeded>/<attempted>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<FailedAsset>,
}

impl RunSummary {
    /// True when every attempted record was written (including the empty run).
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.attempted
    }

    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.succeeded, self.attempted)
    }
}

/// Fetch every record into `dir`, reporting progress through `on_event`.
///
/// Only failing to create `dir` is an error; per-record failures are
/// collected in the returned summary.
pub fn fetch_all<F>(
    transport: &dyn Transport,
    records: &[AssetRecord],
    dir: &Path,
    mut on_event: F,
) -> Result<RunSummary>
where
    F: FnMut(FetchEvent<'_>),
{
    storage::ensure_dir(dir)?;

    let mut summary = RunSummary::default();
    for record in records {
        let filename = record.filename.as_str();
        summary.attempted += 1;
        on_event(FetchEvent::Started { filename });

        match fetch_one(transport, record, dir) {
            Ok((path, bytes)) => {
                summary.succeeded += 1;
                on_event(FetchEvent::Saved {
                    filename,
                    path: &path,
                    bytes,
                });
            }
            Err(err) => {
                let error = format!("{:#}", err);
                tracing::warn!(filename, source = %record.source, "download failed: {}", error);
                on_event(FetchEvent::Failed {
                    filename,
                    error: &error,
                });
                summary.failures.push(FailedAsset {
                    filename: record.filename.clone(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        attempted = summary.attempted,
        succeeded = summary.succeeded,
        dir = %dir.display(),
        "fetch run finished"
    );
    Ok(summary)
}

fn fetch_one(
    transport: &dyn Transport,
    record: &AssetRecord,
    dir: &Path,
) -> Result<(PathBuf, usize)> {
    let body: Cow<'_, [u8]> = match &record.source {
        AssetSource::Embedded(bytes) => Cow::Borrowed(*bytes),
        AssetSource::Remote(url) => Cow::Owned(transport.get(url)?),
    };
    let path = dir.join(&record.filename);
    storage::write_atomic(&path, &body)?;
    tracing::debug!(
        path = %path.display(),
        bytes = body.len(),
        sha256 = %checksum::sha256_bytes(&body),
        "asset saved"
    );
    Ok((path, body.len()))
}
