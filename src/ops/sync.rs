//! Workspace synchronization - the whole pipeline.
//!
//! Discovers member packages, resolves every package's in-workspace
//! dependencies against the shared index, then rewrites each tsconfig.
//! Per-package work fans out across threads; failures are collected and
//! the first one aborts the run after in-flight siblings finish.

use anyhow::Result;
use rayon::prelude::*;

use crate::core::{Package, PackageIndex, Workspace};
use crate::ops::references;
use crate::ops::resolve::{resolve_package, ResolvedPackage};
use crate::util::fs::list_dirs;

/// Options for the sync operation.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Verify only: report stale packages without writing anything
    pub check: bool,
}

/// Summary of a sync run.
#[derive(Debug)]
pub struct SyncReport {
    /// Number of packages processed
    pub packages: usize,

    /// Packages whose tsconfig was out of date (check mode only)
    pub stale: Vec<String>,
}

impl SyncReport {
    /// Whether every package's references were already up to date.
    pub fn is_synced(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Synchronize every member package's references with its dependencies.
pub fn sync(ws: &Workspace, opts: &SyncOptions) -> Result<SyncReport> {
    let prefix = ws.scope_prefix();
    let package_dirs = list_dirs(&ws.packages_dir())?;
    let index = PackageIndex::new(ws.packages_dir());

    tracing::info!(
        "Resolving {} packages under scope {}",
        package_dirs.len(),
        prefix
    );

    let results: Vec<Result<ResolvedPackage>> = package_dirs
        .par_iter()
        .map(|dir| {
            let package = Package::load(dir)?;
            resolve_package(&prefix, package, &index)
        })
        .collect();

    // All resolutions have finished; now surface the first failure.
    let mut resolved = Vec::with_capacity(results.len());
    for result in results {
        resolved.push(result?);
    }

    if opts.check {
        return check(resolved);
    }

    let writes: Vec<Result<()>> = resolved.par_iter().map(references::apply).collect();
    for write in writes {
        write?;
    }

    tracing::info!("Synced {} packages", resolved.len());

    Ok(SyncReport {
        packages: resolved.len(),
        stale: Vec::new(),
    })
}

/// Check mode: compare rendered output against what is on disk.
fn check(resolved: Vec<ResolvedPackage>) -> Result<SyncReport> {
    let checks: Vec<Result<Option<String>>> = resolved
        .par_iter()
        .map(|package| {
            if references::is_synced(package)? {
                Ok(None)
            } else {
                Ok(Some(package.package.name().to_string()))
            }
        })
        .collect();

    let mut stale = Vec::new();
    for result in checks {
        if let Some(name) = result? {
            stale.push(name);
        }
    }

    Ok(SyncReport {
        packages: resolved.len(),
        stale,
    })
}
