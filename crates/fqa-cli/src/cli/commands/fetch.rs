//! `fqa fetch`: download the companion plant photos.

use anyhow::{Context, Result};
use fqa_core::catalog;
use fqa_core::config::FetchConfig;
use fqa_core::fetcher::{self, FetchEvent, RunSummary};
use fqa_core::transport::CurlTransport;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Console line for one progress event.
pub(crate) fn event_line(event: &FetchEvent<'_>) -> String {
    match event {
        FetchEvent::Started { filename } => format!("Downloading {}...", filename),
        FetchEvent::Saved { filename, .. } => format!("[OK] Downloaded {}", filename),
        FetchEvent::Failed { filename, error } => {
            format!("[ERROR] Error downloading {}: {}", filename, error)
        }
    }
}

fn print_event(event: FetchEvent<'_>) {
    println!("{}", event_line(&event));
}

/// Closing lines printed after the run.
pub(crate) fn summary_lines(summary: &RunSummary, dest: &Path) -> Vec<String> {
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        format!("Downloaded {} plant images", summary),
        format!("Images saved to: {}", dest.display()),
        String::new(),
    ];
    if summary.is_complete() {
        lines.push("[SUCCESS] All plant images downloaded successfully!".to_string());
        lines.push(
            "The app will now use these real plant images instead of network URLs.".to_string(),
        );
    } else {
        lines.push(format!(
            "[WARNING] Only {} images downloaded successfully.",
            summary.succeeded
        ));
    }
    lines
}

/// Runs the whole (blocking, sequential) fetch loop on one blocking thread.
/// Partial failure still returns Ok.
pub async fn run_fetch(dest: &Path, fetch_cfg: &FetchConfig) -> Result<()> {
    println!("Downloading plant images for FitQuest companion...");
    println!("{}", "=".repeat(RULE_WIDTH));

    let summary = tokio::task::spawn_blocking({
        let dest = dest.to_path_buf();
        let transport = CurlTransport::new(fetch_cfg);
        move || {
            fetcher::fetch_all(
                &transport,
                &catalog::companion_images(),
                &dest,
                print_event,
            )
        }
    })
    .await
    .context("fetch task join")??;

    let shown = dest.canonicalize().unwrap_or_else(|_| dest.to_path_buf());
    for line in summary_lines(&summary, &shown) {
        println!("{}", line);
    }
    if !summary.is_complete() {
        tracing::warn!(failed = summary.failed(), "some companion images are missing");
    }
    Ok(())
}
