//! refsync CLI - synchronizes project references in a monorepo

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use refsync::{sync, SyncOptions, Workspace};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("refsync=debug")
    } else {
        EnvFilter::new("refsync=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let root = match cli.dir {
        Some(dir) => dir,
        None => PathBuf::from("."),
    };

    let ws = Workspace::open(&root)?;
    let opts = SyncOptions { check: cli.check };
    let report = sync(&ws, &opts)?;

    if cli.check && !report.is_synced() {
        bail!(
            "references out of date for: {}",
            report.stale.join(", ")
        );
    }

    Ok(())
}
