//! Package index - name to directory lookup over the packages directory.
//!
//! The index is built lazily on first resolution and reused for the rest
//! of the run. Discovery reads every member package.json exactly once,
//! no matter how many threads are resolving concurrently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use thiserror::Error;

use crate::core::Manifest;
use crate::util::fs::list_dirs;

/// Error during dependency resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not find package `{package}`")]
    PackageNotFound {
        package: String,
        suggestions: Vec<String>,
    },
}

/// Lazily-built mapping from package name to package directory.
///
/// Constructed once per run and passed by reference wherever resolution
/// happens; it is not a global. The inner map is populated under the
/// mutex, so concurrent callers either build it (one of them) or wait.
#[derive(Debug)]
pub struct PackageIndex {
    /// Directory whose children are the member packages
    packages_dir: PathBuf,

    /// name -> directory, None until first resolution
    map: Mutex<Option<HashMap<String, PathBuf>>>,
}

impl PackageIndex {
    /// Create an index over a packages directory. No I/O happens here.
    pub fn new(packages_dir: PathBuf) -> Self {
        PackageIndex {
            packages_dir,
            map: Mutex::new(None),
        }
    }

    /// Resolve a package name to its directory.
    ///
    /// The first call discovers all member packages; later calls hit the
    /// cached map. An unknown name is fatal to the run.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut guard = self.map.lock().expect("package index lock poisoned");

        if guard.is_none() {
            *guard = Some(discover(&self.packages_dir)?);
        }

        let map = guard.as_ref().expect("index populated above");
        match map.get(name) {
            Some(dir) => Ok(dir.clone()),
            None => Err(ResolveError::PackageNotFound {
                package: name.to_string(),
                suggestions: suggest(name, map),
            }
            .into()),
        }
    }
}

/// Read every member manifest and build the name -> directory map.
///
/// First-encountered wins on duplicate names; the shadowed entry is
/// logged so the collision is at least observable.
fn discover(packages_dir: &Path) -> Result<HashMap<String, PathBuf>> {
    let mut map: HashMap<String, PathBuf> = HashMap::new();

    for dir in list_dirs(packages_dir)? {
        let manifest = Manifest::load(&dir.join("package.json"))?;

        if let Some(existing) = map.get(&manifest.name) {
            tracing::debug!(
                "duplicate package name `{}`: keeping {}, ignoring {}",
                manifest.name,
                existing.display(),
                dir.display()
            );
            continue;
        }

        tracing::debug!("indexed {} -> {}", manifest.name, dir.display());
        map.insert(manifest.name, dir);
    }

    Ok(map)
}

/// Names sharing the requested name's scope, for the error report.
fn suggest(name: &str, map: &HashMap<String, PathBuf>) -> Vec<String> {
    let scope = match name.split_once('/') {
        Some((scope, _)) => scope,
        None => return Vec::new(),
    };

    let mut candidates: Vec<String> = map
        .keys()
        .filter(|known| known.starts_with(scope))
        .cloned()
        .collect();
    candidates.sort();
    candidates
}
