//! Path source - discovers packages beneath one search path.

use std::collections::HashMap;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::core::{Package, MANIFEST_NAME};

/// Marker files that hide a directory from discovery.
pub const IGNORE_MARKERS: [&str; 3] = ["CATKIN_IGNORE", "AMENT_IGNORE", "COLCON_IGNORE"];

/// Find all packages beneath `root`.
///
/// A directory containing a `package.xml` is a package and is not searched
/// any further. Hidden directories and directories holding one of the
/// [`IGNORE_MARKERS`] are skipped. Traversal is sorted by file name so
/// the result is deterministic.
///
/// Discovery never fails: an unreadable root yields no packages, and a
/// manifest that cannot be parsed is skipped with a warning.
pub fn find_packages(root: &Path) -> Vec<Package> {
    if !root.is_dir() {
        tracing::warn!("skipping search path {}: not a directory", root.display());
        return Vec::new();
    }

    let mut packages: Vec<Package> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    let mut walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        if entry.depth() > 0 && is_hidden(&entry) {
            walker.skip_current_dir();
            continue;
        }

        let dir = entry.path();
        if let Some(marker) = IGNORE_MARKERS.iter().find(|m| dir.join(m).exists()) {
            tracing::debug!("ignoring {} ({} present)", dir.display(), marker);
            walker.skip_current_dir();
            continue;
        }

        let manifest_path = dir.join(MANIFEST_NAME);
        if !manifest_path.is_file() {
            continue;
        }
        walker.skip_current_dir();

        let package = match Package::load(&manifest_path) {
            Ok(package) => package,
            Err(e) => {
                tracing::warn!("skipping package: {}", e);
                continue;
            }
        };

        if let Some(&first) = seen.get(package.name()) {
            tracing::warn!(
                "package `{}` found twice under {}: keeping {}, ignoring {}",
                package.name(),
                root.display(),
                packages[first].manifest_path().display(),
                package.manifest_path().display()
            );
            continue;
        }

        tracing::debug!("found {} at {}", package, dir.display());
        seen.insert(package.name().to_string(), packages.len());
        packages.push(package);
    }

    packages
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
