//! Rewriting a package's tsconfig references.

use anyhow::Result;

use crate::core::tsconfig::{Reference, TsConfig};
use crate::ops::resolve::ResolvedPackage;
use crate::util::fs::{read_to_string, relative_path, write_string};

/// Project references for a resolved package, as relative paths.
fn references_for(resolved: &ResolvedPackage) -> Vec<Reference> {
    resolved
        .dependencies
        .iter()
        .map(|dep| Reference {
            path: relative_path(resolved.package.root(), &dep.directory)
                .to_string_lossy()
                .into_owned(),
        })
        .collect()
}

/// Parse existing tsconfig content and render it with updated references.
fn render_updated(content: &str, resolved: &ResolvedPackage) -> Result<String> {
    let mut config = TsConfig::parse(content, &resolved.package.tsconfig_path())?;
    config.set_references(references_for(resolved));
    config.render()
}

/// Rewrite the package's tsconfig.json in place.
///
/// Read-render-write, no atomic replacement: a crash mid-write can leave
/// a truncated file, matching the tool's fail-whole contract.
pub fn apply(resolved: &ResolvedPackage) -> Result<()> {
    let path = resolved.package.tsconfig_path();
    let content = read_to_string(&path)?;
    let updated = render_updated(&content, resolved)?;

    tracing::debug!(
        "writing {} references to {}",
        resolved.dependencies.len(),
        path.display()
    );
    write_string(&path, &updated)
}

/// Check whether the package's tsconfig.json is already up to date.
pub fn is_synced(resolved: &ResolvedPackage) -> Result<bool> {
    let path = resolved.package.tsconfig_path();
    let content = read_to_string(&path)?;
    Ok(render_updated(&content, resolved)? == content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Manifest, Package};
    use crate::ops::resolve::ResolvedDependency;
    use std::path::Path;
    use tempfile::TempDir;

    fn resolved_package(dir: &Path, deps: &[(&str, &Path)]) -> ResolvedPackage {
        let manifest =
            Manifest::parse(r#"{"name": "@acme/a"}"#, &dir.join("package.json")).unwrap();
        ResolvedPackage {
            package: Package::new(manifest, dir.to_path_buf()),
            dependencies: deps
                .iter()
                .map(|(name, directory)| ResolvedDependency {
                    name: name.to_string(),
                    directory: directory.to_path_buf(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_apply_writes_relative_references() {
        let tmp = TempDir::new().unwrap();
        let pkg_a = tmp.path().join("packages/a");
        let pkg_b = tmp.path().join("packages/b");
        std::fs::create_dir_all(&pkg_a).unwrap();
        std::fs::write(
            pkg_a.join("tsconfig.json"),
            r#"{"compilerOptions": {"composite": true}}"#,
        )
        .unwrap();

        let resolved = resolved_package(&pkg_a, &[("@acme/b", pkg_b.as_path())]);
        apply(&resolved).unwrap();

        let written = std::fs::read_to_string(pkg_a.join("tsconfig.json")).unwrap();
        assert!(written.contains(r#""composite": true"#));
        assert!(written.contains(&format!(
            r#""path": "{}""#,
            Path::new("..").join("b").display()
        )));
    }

    #[test]
    fn test_apply_empty_references_for_leaf_package() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("packages/leaf");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join("tsconfig.json"), r#"{"references": [{"path": "../stale"}]}"#)
            .unwrap();

        let resolved = resolved_package(&pkg, &[]);
        apply(&resolved).unwrap();

        let written = std::fs::read_to_string(pkg.join("tsconfig.json")).unwrap();
        assert!(written.contains(r#""references": []"#));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_apply_missing_tsconfig_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("packages/a");
        std::fs::create_dir_all(&pkg).unwrap();

        let resolved = resolved_package(&pkg, &[]);
        assert!(apply(&resolved).is_err());
    }

    #[test]
    fn test_is_synced_after_apply() {
        let tmp = TempDir::new().unwrap();
        let pkg_a = tmp.path().join("packages/a");
        let pkg_b = tmp.path().join("packages/b");
        std::fs::create_dir_all(&pkg_a).unwrap();
        std::fs::write(pkg_a.join("tsconfig.json"), r#"{"compilerOptions": {}}"#).unwrap();

        let resolved = resolved_package(&pkg_a, &[("@acme/b", pkg_b.as_path())]);
        assert!(!is_synced(&resolved).unwrap());

        apply(&resolved).unwrap();
        assert!(is_synced(&resolved).unwrap());
    }
}
