//! Package - a manifest together with its location on disk.

use std::path::{Path, PathBuf};

use crate::core::manifest::{Manifest, ManifestError};
use crate::core::Dependency;

/// A discovered package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// The parsed manifest
    manifest: Manifest,

    /// Path of the package.xml the manifest was read from
    manifest_path: PathBuf,
}

impl Package {
    /// Create a package from an already parsed manifest.
    pub fn new(manifest: Manifest, manifest_path: PathBuf) -> Self {
        Package {
            manifest,
            manifest_path,
        }
    }

    /// Load a package from a manifest file.
    pub fn load(manifest_path: &Path) -> Result<Self, ManifestError> {
        let manifest = Manifest::load(manifest_path)?;
        Ok(Package::new(manifest, manifest_path.to_path_buf()))
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Get the package version.
    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    /// Get the manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the manifest file path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Get the package root directory (the directory holding package.xml).
    pub fn root(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new("."))
    }

    /// Get the build dependencies in declaration order.
    pub fn build_depends(&self) -> &[Dependency] {
        &self.manifest.build_depends
    }

    /// Check whether the package declares a build dependency on `name`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.build_depends().iter().any(|d| d.name() == name)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name(), self.version())
    }
}
