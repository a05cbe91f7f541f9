//! Workspace - the monorepo root and its layout.
//!
//! A Workspace is the root package.json plus the conventional `packages/`
//! directory holding one subdirectory per member package.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::Manifest;

/// Name of the subdirectory containing member packages.
pub const PACKAGES_DIR: &str = "packages";

/// A monorepo workspace rooted at the directory holding package.json.
#[derive(Debug)]
pub struct Workspace {
    /// The root manifest
    manifest: Manifest,

    /// Workspace root directory
    root: PathBuf,
}

impl Workspace {
    /// Open a workspace rooted at `root`, reading its package.json.
    pub fn open(root: &Path) -> Result<Self> {
        let manifest = Manifest::load(&root.join("package.json"))?;

        Ok(Workspace {
            manifest,
            root: root.to_path_buf(),
        })
    }

    /// Get the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the root manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The scope prefix used to recognize in-workspace dependencies.
    ///
    /// Derived from the root manifest name: a root named `acme` scopes
    /// its members under `@acme/`.
    pub fn scope_prefix(&self) -> String {
        format!("@{}/", self.manifest.name)
    }

    /// Directory holding the member packages.
    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }
}
