//! Configuration file support for genjava.
//!
//! genjava reads two configuration file locations:
//! - Global: `~/.genjava/config.toml` - User-wide defaults
//! - Project: `.genjava/config.toml` - Overrides for the current directory
//!
//! Project config takes precedence over global config. Command line flags
//! take precedence over both.
//!
//! ```toml
//! [classification]
//! whitelist = ["map_store"]
//! blacklist = ["rosjava_test_msgs"]
//!
//! [artifact]
//! group = "org.ros.rosjava_messages"
//!
//! [gradle]
//! wrapper = "/opt/ros/share/rosjava_build_tools/gradle/gradlew"
//!
//! [templates]
//! dir = "/etc/genjava/templates"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::resolver::ClassificationLists;

/// genjava configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message package whitelist/blacklist
    pub classification: ClassificationLists,

    /// Generated artifact settings
    pub artifact: ArtifactConfig,

    /// Gradle settings
    pub gradle: GradleConfig,

    /// Template settings
    pub templates: TemplatesConfig,
}

/// Generated artifact settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Maven group of generated artifacts
    pub group: Option<String>,
}

/// Gradle settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GradleConfig {
    /// Path (or executable name) of the Gradle wrapper
    pub wrapper: Option<PathBuf>,
}

/// Template settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory whose templates replace the built-in ones
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    ///
    /// Classification lists are unioned: a project can add to the global
    /// lists but not remove from them.
    pub fn merge(&mut self, other: Config) {
        self.classification.extend(
            other.classification.whitelist,
            other.classification.blacklist,
        );

        if other.artifact.group.is_some() {
            self.artifact.group = other.artifact.group;
        }
        if other.gradle.wrapper.is_some() {
            self.gradle.wrapper = other.gradle.wrapper;
        }
        if other.templates.dir.is_some() {
            self.templates.dir = other.templates.dir;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.genjava/config.toml)
/// 2. Global config (~/.genjava/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}
