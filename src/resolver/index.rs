//! The message package index.
//!
//! Search paths are processed base-first, so a package found under a later
//! (overlay) path replaces any same-named package found earlier. Version
//! strings are never compared; the layer alone decides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::Package;
use crate::resolver::classify::ClassificationLists;
use crate::resolver::errors::ResolveError;
use crate::sources::find_packages;

/// A package from a lower layer shadowed by one from a higher layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub name: String,
    pub shadowed_manifest: PathBuf,
    pub shadowed_version: String,
    pub manifest: PathBuf,
    pub version: String,
}

/// Mapping from package name to the single selected message package.
#[derive(Debug, Clone, Default)]
pub struct MessagePackageIndex {
    packages: HashMap<String, Package>,
    overlays: Vec<Overlay>,
}

impl MessagePackageIndex {
    /// Scan `search_paths` (base-first) and index every message package.
    pub fn build(search_paths: &[PathBuf], lists: &ClassificationLists) -> Self {
        let mut index = MessagePackageIndex::default();
        for path in search_paths {
            index.add_layer(path, find_packages(path), lists);
        }
        tracing::debug!(
            "indexed {} message packages from {} search paths",
            index.len(),
            search_paths.len()
        );
        index
    }

    /// Merge the packages of one layer into the index. Layers must be added
    /// base-first.
    pub fn add_layer(
        &mut self,
        layer: &Path,
        packages: impl IntoIterator<Item = Package>,
        lists: &ClassificationLists,
    ) {
        for package in packages {
            if !lists.is_message_package(&package) {
                continue;
            }

            let name = package.name().to_string();
            if let Some(previous) = self.packages.get(&name) {
                let overlay = Overlay {
                    name: name.clone(),
                    shadowed_manifest: previous.manifest_path().to_path_buf(),
                    shadowed_version: previous.version().to_string(),
                    manifest: package.manifest_path().to_path_buf(),
                    version: package.version().to_string(),
                };
                tracing::debug!(
                    "overlay: `{}` {} ({}) shadows {} ({}) from layer {}",
                    overlay.name,
                    overlay.version,
                    overlay.manifest.display(),
                    overlay.shadowed_version,
                    overlay.shadowed_manifest.display(),
                    layer.display()
                );
                self.overlays.push(overlay);
            }

            self.packages.insert(name, package);
        }
    }

    /// Look up a package by name.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Look up a package, failing with a diagnostic-friendly error.
    pub fn require(&self, name: &str) -> Result<&Package, ResolveError> {
        self.get(name).ok_or_else(|| ResolveError::PackageNotFound {
            package: name.to_string(),
            similar: self.similar_names(name),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate packages in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Packages sorted by name, for stable output.
    pub fn sorted(&self) -> Vec<&Package> {
        let mut packages: Vec<_> = self.packages.values().collect();
        packages.sort_by(|a, b| a.name().cmp(b.name()));
        packages
    }

    /// Shadowing events recorded while building, in the order they happened.
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    fn similar_names(&self, name: &str) -> Vec<String> {
        let mut similar: Vec<String> = self
            .packages
            .keys()
            .filter(|k| !name.is_empty() && (k.contains(name) || name.contains(k.as_str())))
            .cloned()
            .collect();
        similar.sort();
        similar.truncate(3);
        similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{package_at, write_package};
    use tempfile::TempDir;

    #[test]
    fn test_overlay_wins_regardless_of_version() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();

        index.add_layer(
            Path::new("/base"),
            [package_at("/base/foo_msgs", "foo_msgs", "9.0.0", &["message_generation"])],
            &lists,
        );
        index.add_layer(
            Path::new("/overlay"),
            [package_at("/overlay/foo_msgs", "foo_msgs", "1.0.0", &["message_generation"])],
            &lists,
        );

        let foo = index.get("foo_msgs").unwrap();
        assert_eq!(foo.version(), "1.0.0");
        assert_eq!(foo.root(), Path::new("/overlay/foo_msgs"));

        assert_eq!(index.overlays().len(), 1);
        let overlay = &index.overlays()[0];
        assert_eq!(overlay.shadowed_version, "9.0.0");
        assert_eq!(overlay.version, "1.0.0");
    }

    #[test]
    fn test_overlay_replaces_entire_package() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();

        index.add_layer(
            Path::new("/base"),
            [package_at("/base/a", "a_msgs", "1.0.0", &["message_generation", "b_msgs"])],
            &lists,
        );
        index.add_layer(
            Path::new("/overlay"),
            [package_at("/overlay/a", "a_msgs", "1.0.1", &["genmsg"])],
            &lists,
        );

        let deps: Vec<_> = index
            .get("a_msgs")
            .unwrap()
            .build_depends()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(deps, vec!["genmsg".to_string()]);
    }

    #[test]
    fn test_non_message_overlay_does_not_shadow() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();

        index.add_layer(
            Path::new("/base"),
            [package_at("/base/a", "a_msgs", "1.0.0", &["message_generation"])],
            &lists,
        );
        // The overlay copy no longer declares a trigger, so it is not a candidate.
        index.add_layer(
            Path::new("/overlay"),
            [package_at("/overlay/a", "a_msgs", "2.0.0", &[])],
            &lists,
        );

        assert_eq!(index.get("a_msgs").unwrap().version(), "1.0.0");
        assert!(index.overlays().is_empty());
    }

    #[test]
    fn test_classification_applied() {
        let lists = ClassificationLists::new(["white"], ["black_msgs"]);
        let mut index = MessagePackageIndex::default();

        index.add_layer(
            Path::new("/ws"),
            [
                package_at("/ws/white", "white", "1.0.0", &[]),
                package_at("/ws/black", "black_msgs", "1.0.0", &["message_generation"]),
                package_at("/ws/plain", "plain", "1.0.0", &["roscpp"]),
                package_at("/ws/real", "real_msgs", "1.0.0", &["genmsg"]),
            ],
            &lists,
        );

        let names: Vec<_> = index.sorted().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["real_msgs".to_string(), "white".to_string()]);
    }

    #[test]
    fn test_build_from_disk_with_missing_path() {
        let base = TempDir::new().unwrap();
        let overlay = TempDir::new().unwrap();
        write_package(base.path(), "foo_msgs", "foo_msgs", "1.0.0", &["message_generation"]);
        write_package(overlay.path(), "src/foo_msgs", "foo_msgs", "2.0.0", &["message_generation"]);

        let paths = vec![
            base.path().to_path_buf(),
            base.path().join("missing"),
            overlay.path().to_path_buf(),
        ];
        let index = MessagePackageIndex::build(&paths, &ClassificationLists::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("foo_msgs").unwrap().version(), "2.0.0");
    }

    #[test]
    fn test_require_reports_similar_names() {
        let lists = ClassificationLists::default();
        let mut index = MessagePackageIndex::default();
        index.add_layer(
            Path::new("/ws"),
            [package_at("/ws/foo", "foo_msgs", "1.0.0", &["genmsg"])],
            &lists,
        );

        assert!(index.require("foo_msgs").is_ok());
        match index.require("foo") {
            Err(ResolveError::PackageNotFound { package, similar }) => {
                assert_eq!(package, "foo");
                assert_eq!(similar, vec!["foo_msgs".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
