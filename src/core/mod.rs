//! Core data structures for genjava.
//!
//! This module contains the foundational types used throughout genjava:
//! - Manifests and their dependencies
//! - Packages discovered on disk
//! - The layered workspace of search paths

pub mod dependency;
pub mod manifest;
pub mod package;
pub mod workspace;

pub use dependency::{Dependency, VersionConstraint, VersionOp};
pub use manifest::{Manifest, ManifestError, MANIFEST_NAME};
pub use package::Package;
pub use workspace::{
    split_path_list, SearchPaths, Workspace, PACKAGE_PATH_ENV, PATH_LIST_SEPARATOR,
};
