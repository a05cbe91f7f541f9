//! Package - a manifest paired with the directory it was loaded from.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::Manifest;

/// A workspace package: its manifest plus its root directory.
#[derive(Debug, Clone)]
pub struct Package {
    /// The parsed manifest
    manifest: Manifest,

    /// Root directory of the package
    root: PathBuf,
}

impl Package {
    /// Create a new package from a manifest and root directory.
    pub fn new(manifest: Manifest, root: PathBuf) -> Self {
        Package { manifest, root }
    }

    /// Load a package from its root directory.
    pub fn load(root: &Path) -> Result<Self> {
        let manifest = Manifest::load(&root.join("package.json"))?;
        Ok(Package::new(manifest, root.to_path_buf()))
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Get the manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the package root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the manifest file path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Get the build-configuration file path.
    pub fn tsconfig_path(&self) -> PathBuf {
        self.root.join("tsconfig.json")
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.manifest.name, self.root.display())
    }
}
