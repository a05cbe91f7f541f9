//! Per-package dependency resolution.
//!
//! Filters a package's declared dependencies down to in-workspace ones
//! and maps each to its directory through the shared index.

use std::path::PathBuf;

use anyhow::Result;

use crate::core::{Package, PackageIndex};

/// An in-workspace dependency resolved to its directory.
#[derive(Debug, Clone)]
pub struct ResolvedDependency {
    /// Dependency name, e.g. `@acme/core`
    pub name: String,

    /// Directory of the package providing it
    pub directory: PathBuf,
}

/// A package together with its resolved in-workspace dependencies.
#[derive(Debug)]
pub struct ResolvedPackage {
    /// The package being processed
    pub package: Package,

    /// In-workspace dependencies, in merged-manifest order
    pub dependencies: Vec<ResolvedDependency>,
}

/// Resolve one package's in-workspace dependencies.
///
/// Dependency names are matched against the scope prefix by exact string
/// prefix; everything else is external and ignored. Output order follows
/// the merged dependency map, so reruns produce identical reference
/// lists.
pub fn resolve_package(
    scope_prefix: &str,
    package: Package,
    index: &PackageIndex,
) -> Result<ResolvedPackage> {
    let merged = package.manifest().merged_dependencies();

    let mut dependencies = Vec::new();
    for name in merged.keys().filter(|name| name.starts_with(scope_prefix)) {
        let directory = index.resolve(name)?;
        dependencies.push(ResolvedDependency {
            name: name.clone(),
            directory,
        });
    }

    tracing::debug!(
        "{}: {} in-scope dependencies",
        package.name(),
        dependencies.len()
    );

    Ok(ResolvedPackage {
        package,
        dependencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Manifest;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_member(packages_dir: &Path, dir_name: &str, manifest: &str) -> PathBuf {
        let dir = packages_dir.join(dir_name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("package.json"), manifest).unwrap();
        dir
    }

    fn package_from(dir: PathBuf, manifest: &str) -> Package {
        let manifest = Manifest::parse(manifest, &dir.join("package.json")).unwrap();
        Package::new(manifest, dir)
    }

    #[test]
    fn test_resolve_filters_external_dependencies() {
        let tmp = TempDir::new().unwrap();
        create_member(tmp.path(), "b", r#"{"name": "@acme/b"}"#);
        let manifest = r#"{
            "name": "@acme/a",
            "dependencies": {"@acme/b": "1.0.0", "lodash": "4.0.0"}
        }"#;
        let dir = create_member(tmp.path(), "a", manifest);

        let index = PackageIndex::new(tmp.path().to_path_buf());
        let resolved = resolve_package("@acme/", package_from(dir, manifest), &index).unwrap();

        assert_eq!(resolved.dependencies.len(), 1);
        assert_eq!(resolved.dependencies[0].name, "@acme/b");
        assert_eq!(resolved.dependencies[0].directory, tmp.path().join("b"));
    }

    #[test]
    fn test_resolve_ignores_same_named_package_outside_scope() {
        let tmp = TempDir::new().unwrap();
        // A workspace member literally named `lodash` must still not match
        // the external `lodash` dependency.
        create_member(tmp.path(), "lodash", r#"{"name": "lodash"}"#);
        let manifest = r#"{"name": "@acme/a", "dependencies": {"lodash": "4.0.0"}}"#;
        let dir = create_member(tmp.path(), "a", manifest);

        let index = PackageIndex::new(tmp.path().to_path_buf());
        let resolved = resolve_package("@acme/", package_from(dir, manifest), &index).unwrap();

        assert!(resolved.dependencies.is_empty());
    }

    #[test]
    fn test_resolve_missing_dependency_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let manifest = r#"{"name": "@acme/a", "dependencies": {"@acme/ghost": "1.0.0"}}"#;
        let dir = create_member(tmp.path(), "a", manifest);

        let index = PackageIndex::new(tmp.path().to_path_buf());
        let err = resolve_package("@acme/", package_from(dir, manifest), &index).unwrap_err();
        assert!(err.to_string().contains("@acme/ghost"));
    }

    #[test]
    fn test_resolve_includes_dev_dependencies() {
        let tmp = TempDir::new().unwrap();
        create_member(tmp.path(), "b", r#"{"name": "@acme/b"}"#);
        create_member(tmp.path(), "testkit", r#"{"name": "@acme/testkit"}"#);
        let manifest = r#"{
            "name": "@acme/a",
            "dependencies": {"@acme/b": "1.0.0"},
            "devDependencies": {"@acme/testkit": "0.1.0"}
        }"#;
        let dir = create_member(tmp.path(), "a", manifest);

        let index = PackageIndex::new(tmp.path().to_path_buf());
        let resolved = resolve_package("@acme/", package_from(dir, manifest), &index).unwrap();

        // devDependencies come first in merged order
        let names: Vec<_> = resolved.dependencies.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["@acme/testkit", "@acme/b"]);
    }
}
