//! CLI for the FitQuest asset tools.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fqa_core::catalog::COMPANION_DIR;
use fqa_core::config::{self, FqaConfig};
use std::path::PathBuf;

use commands::{run_checksum, run_fetch, run_placeholders};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fqa")]
#[command(about = "FitQuest asset tools: placeholder images and companion plant photos", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write placeholder PNGs into the image asset directory.
    Placeholders {
        /// Output directory (default: `assets_dir` from config, `assets/images`).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
        /// How many placeholders to write (default: 3).
        #[arg(long, value_name = "N")]
        count: Option<usize>,
    },

    /// Download the companion plant photos, one per evolution stage.
    Fetch {
        /// Destination directory (default: `<assets_dir>/companion`).
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Destination for fetched photos: the override, or the companion dir under the asset dir.
fn companion_dir(cfg: &FqaConfig, dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| cfg.assets_dir.join(COMPANION_DIR))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Placeholders { dir, count } => {
                let dir = dir.unwrap_or_else(|| cfg.assets_dir.clone());
                run_placeholders(&dir, count.unwrap_or(cfg.placeholder_count)).await?;
            }
            CliCommand::Fetch { dir } => {
                let dest = companion_dir(&cfg, dir);
                run_fetch(&dest, &cfg.fetch).await?;
            }
            CliCommand::Checksum { path } => run_checksum(&path).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
