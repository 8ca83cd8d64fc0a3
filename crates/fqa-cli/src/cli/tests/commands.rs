use crate::cli::commands::{
    created_line, event_line, run_checksum, run_placeholders, summary_lines,
};
use fqa_core::fetcher::{FailedAsset, FetchEvent, RunSummary};
use fqa_core::placeholder::PLACEHOLDER_PNG;
use std::fs;
use std::path::Path;

#[tokio::test]
async fn placeholders_command_writes_files() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("assets").join("images");
    run_placeholders(&dir, 3).await.unwrap();
    for i in 1..=3 {
        let content = fs::read(dir.join(format!("placeholder{i}.png"))).unwrap();
        assert_eq!(content, PLACEHOLDER_PNG);
    }
}

#[tokio::test]
async fn placeholders_command_propagates_io_errors() {
    let root = tempfile::tempdir().unwrap();
    let blocker = root.path().join("images");
    fs::write(&blocker, b"").unwrap();
    assert!(run_placeholders(&blocker, 3).await.is_err());
}

#[tokio::test]
async fn checksum_command_missing_file_errors() {
    let root = tempfile::tempdir().unwrap();
    assert!(run_checksum(&root.path().join("nope.png")).await.is_err());
}

#[test]
fn summary_lines_partial_run() {
    let summary = RunSummary {
        attempted: 5,
        succeeded: 4,
        failures: vec![FailedAsset {
            filename: "tree.png".into(),
            error: "HTTP 404".into(),
        }],
    };
    let lines = summary_lines(&summary, Path::new("/abs/assets/images/companion"));
    assert_eq!(lines[1], "Downloaded 4/5 plant images");
    assert_eq!(lines[2], "Images saved to: /abs/assets/images/companion");
    assert_eq!(
        lines.last().unwrap(),
        "[WARNING] Only 4 images downloaded successfully."
    );
}

#[test]
fn summary_lines_complete_and_empty_runs() {
    let full = RunSummary {
        attempted: 5,
        succeeded: 5,
        failures: Vec::new(),
    };
    let lines = summary_lines(&full, Path::new("companion"));
    assert_eq!(lines[1], "Downloaded 5/5 plant images");
    assert!(lines.iter().any(|l| l.starts_with("[SUCCESS]")));

    let empty = summary_lines(&RunSummary::default(), Path::new("companion"));
    assert_eq!(empty[1], "Downloaded 0/0 plant images");
}

#[test]
fn event_lines_match_console_format() {
    assert_eq!(
        event_line(&FetchEvent::Started {
            filename: "seed.png"
        }),
        "Downloading seed.png..."
    );
    assert_eq!(
        event_line(&FetchEvent::Saved {
            filename: "seed.png",
            path: Path::new("assets/images/companion/seed.png"),
            bytes: 4096,
        }),
        "[OK] Downloaded seed.png"
    );
    assert_eq!(
        event_line(&FetchEvent::Failed {
            filename: "tree.png",
            error: "HTTP 404",
        }),
        "[ERROR] Error downloading tree.png: HTTP 404"
    );
}

#[test]
fn created_line_adds_one_separator() {
    assert_eq!(
        created_line(3, Path::new("assets/images")),
        "Created 3 placeholder images in assets/images/"
    );
    assert_eq!(
        created_line(3, Path::new("out/")),
        "Created 3 placeholder images in out/"
    );
}
