//! package.json manifest parsing and schema.
//!
//! Only the fields this tool cares about are modeled; everything else in
//! the manifest is ignored on read and never written back.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// The parsed package.json manifest.
///
/// Dependency maps keep document order: which entry of `dependencies`
/// came first decides the order of the rewritten references.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Package name, e.g. `@acme/client`.
    pub name: String,

    /// Runtime dependencies (name -> version requirement).
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    /// Development dependencies, same shape.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content)
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Merge `dependencies` and `devDependencies` into one ordered map.
    ///
    /// devDependencies entries come first; a name present in both keeps
    /// its devDependencies position but takes the `dependencies` version.
    pub fn merged_dependencies(&self) -> IndexMap<String, String> {
        let mut merged = self.dev_dependencies.clone();
        for (name, version) in &self.dependencies {
            merged.insert(name.clone(), version.clone());
        }
        merged
    }
}
