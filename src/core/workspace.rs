//! Workspace - central configuration hub.
//!
//! A Workspace is the layered set of search paths a ROS environment exposes
//! through `ROS_PACKAGE_PATH`, together with the settings every operation
//! needs: classification lists, the artifact group, the template directory
//! and the Gradle wrapper.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::builder::gradle::{self, GradleError};
use crate::builder::template::TemplateSet;
use crate::resolver::compose::DEFAULT_ARTIFACT_GROUP;
use crate::resolver::{ClassificationLists, MessagePackageIndex};

/// Environment variable holding the package search path list.
pub const PACKAGE_PATH_ENV: &str = "ROS_PACKAGE_PATH";

/// Separator of path lists handed to Gradle on this platform.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';

/// Split a colon or semicolon delimited path list, dropping empty entries.
///
/// On Windows only `;` separates entries since `:` appears in drive letters.
pub fn split_path_list(value: &str) -> Vec<PathBuf> {
    let is_separator = |c: char| c == ';' || (cfg!(not(windows)) && c == ':');
    value
        .split(is_separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Ordered search paths, base layers first and overlays last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Create from paths that are already ordered base-first.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        SearchPaths { paths }
    }

    /// Create from a `ROS_PACKAGE_PATH` style value.
    ///
    /// The variable lists overlays first, so the order is reversed here.
    pub fn from_package_path(value: &str) -> Self {
        let mut paths = split_path_list(value);
        paths.reverse();
        SearchPaths { paths }
    }

    /// Read the search paths from the process environment.
    pub fn from_env() -> Self {
        match std::env::var(PACKAGE_PATH_ENV) {
            Ok(value) => Self::from_package_path(&value),
            Err(_) => {
                tracing::warn!("{} is not set; no packages will be found", PACKAGE_PATH_ENV);
                SearchPaths::default()
            }
        }
    }

    /// Iterate base-first.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Get the paths as a slice, base-first.
    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A workspace of message packages and the settings to generate them with.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Layered search paths
    search_paths: SearchPaths,

    /// Message package whitelist and blacklist
    classification: ClassificationLists,

    /// Maven group of generated artifacts
    artifact_group: String,

    /// Directory overriding the built-in templates
    template_dir: Option<PathBuf>,

    /// Explicit Gradle wrapper, bypassing discovery
    gradle_wrapper: Option<PathBuf>,
}

impl Workspace {
    /// Create a workspace over the given search paths.
    pub fn new(search_paths: SearchPaths) -> Self {
        Workspace {
            search_paths,
            classification: ClassificationLists::default(),
            artifact_group: DEFAULT_ARTIFACT_GROUP.to_string(),
            template_dir: None,
            gradle_wrapper: None,
        }
    }

    /// Set the classification lists.
    pub fn with_classification(mut self, classification: ClassificationLists) -> Self {
        self.classification = classification;
        self
    }

    /// Set the artifact group.
    pub fn with_artifact_group(mut self, group: impl Into<String>) -> Self {
        self.artifact_group = group.into();
        self
    }

    /// Use templates from a directory instead of the built-in ones.
    pub fn with_template_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.template_dir = dir;
        self
    }

    /// Use an explicit Gradle wrapper.
    pub fn with_gradle_wrapper(mut self, wrapper: Option<PathBuf>) -> Self {
        self.gradle_wrapper = wrapper;
        self
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    pub fn classification(&self) -> &ClassificationLists {
        &self.classification
    }

    pub fn artifact_group(&self) -> &str {
        &self.artifact_group
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    /// Scan the search paths and build the message package index.
    pub fn message_index(&self) -> MessagePackageIndex {
        MessagePackageIndex::build(self.search_paths.as_slice(), &self.classification)
    }

    /// Load the project templates.
    pub fn templates(&self) -> Result<TemplateSet> {
        let templates = match &self.template_dir {
            Some(dir) => TemplateSet::from_dir(dir)?,
            None => TemplateSet::builtin()?,
        };
        Ok(templates)
    }

    /// Resolve the Gradle wrapper, either the explicit one or the one
    /// shipped inside the build tools package.
    pub fn gradle_wrapper(&self) -> Result<PathBuf, GradleError> {
        match &self.gradle_wrapper {
            Some(explicit) => gradle::resolve_explicit_wrapper(explicit),
            None => gradle::locate_wrapper(self.search_paths.as_slice()),
        }
    }

    /// Get the generated project directory for a package.
    pub fn project_dir(output_dir: &Path, name: &str) -> PathBuf {
        output_dir.join(name)
    }
}
