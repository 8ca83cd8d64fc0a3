//! `fqa placeholders`: write the placeholder PNGs.

use anyhow::Result;
use fqa_core::placeholder;
use std::path::{Path, MAIN_SEPARATOR};

/// `Created <n> placeholder images in <dir>/`, with exactly one trailing separator.
pub(crate) fn created_line(count: usize, dir: &Path) -> String {
    let shown = dir.display().to_string();
    let sep = if shown.ends_with(|c: char| c == '/' || c == MAIN_SEPARATOR) {
        ""
    } else {
        "/"
    };
    format!("Created {} placeholder images in {}{}", count, shown, sep)
}

/// Any I/O error is returned as-is; `main` turns it into exit status 1.
pub async fn run_placeholders(dir: &Path, count: usize) -> Result<()> {
    let written = placeholder::generate_n(dir, count)?;
    println!("{}", created_line(written.len(), dir));
    Ok(())
}
