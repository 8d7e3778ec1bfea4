//! Test helpers for building package trees on disk and in memory.

use std::path::{Path, PathBuf};

use crate::core::manifest::generate_manifest;
use crate::core::{Manifest, Package, SearchPaths, Workspace, MANIFEST_NAME};

/// Write a package under `root/rel_dir` and return its directory.
pub fn write_package(
    root: &Path,
    rel_dir: &str,
    name: &str,
    version: &str,
    deps: &[&str],
) -> PathBuf {
    let dir = root.join(rel_dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(MANIFEST_NAME), generate_manifest(name, version, deps)).unwrap();
    dir
}

/// An in-memory package rooted at `/ws/<name>`.
pub fn package(name: &str, version: &str, deps: &[&str]) -> Package {
    package_at(&format!("/ws/{}", name), name, version, deps)
}

/// An in-memory package whose manifest lives in `root_dir`.
pub fn package_at(root_dir: &str, name: &str, version: &str, deps: &[&str]) -> Package {
    let path = Path::new(root_dir).join(MANIFEST_NAME);
    let manifest = Manifest::parse(&generate_manifest(name, version, deps), &path).unwrap();
    Package::new(manifest, path)
}

/// A two-layer workspace under `root`: `ws_base` and `ws_overlay` both
/// provide `foo_msgs`, the overlay copy being newer and also depending on
/// `bar_msgs` and the non-message `roscpp`.
pub fn layered_workspace(root: &Path) -> Workspace {
    let base = root.join("ws_base");
    let overlay = root.join("ws_overlay");
    write_package(&base, "foo_msgs", "foo_msgs", "1.0.0", &["message_generation"]);
    write_package(&base, "bar_msgs", "bar_msgs", "0.5.0", &["message_generation"]);
    write_package(&base, "roscpp", "roscpp", "1.14.0", &[]);
    write_package(
        &overlay,
        "foo_msgs",
        "foo_msgs",
        "2.0.0",
        &["message_generation", "bar_msgs", "roscpp"],
    );
    Workspace::new(SearchPaths::new(vec![base, overlay]))
}

/// A stand-in `gradlew` that appends its arguments to `log` and exits with
/// `exit_code`.
#[cfg(unix)]
pub fn fake_gradlew(dir: &Path, exit_code: i32, log: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("gradlew");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$*\" >> '{}'\nexit {}\n",
            log.display(),
            exit_code
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    script
}
