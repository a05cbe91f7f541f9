//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// refsync - keeps monorepo project references in sync with package
/// dependencies
#[derive(Parser)]
#[command(name = "refsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Verify references are up to date without writing anything
    #[arg(long)]
    pub check: bool,

    /// Workspace root directory (defaults to the current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}
