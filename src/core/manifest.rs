//! package.xml manifest parsing.
//!
//! Supports catkin manifest formats 1 through 3. Only the fields this tool
//! needs are extracted: name, version and the build dependencies.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::dependency::{Dependency, VersionOp};

/// File name of a package manifest.
pub const MANIFEST_NAME: &str = "package.xml";

/// Error loading a package manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse manifest `{}`: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("manifest `{}` has no <package> root element", path.display())]
    NotAPackage { path: PathBuf },

    #[error("manifest `{}` is missing <{element}>", path.display())]
    MissingField { path: PathBuf, element: &'static str },

    #[error("manifest `{}` declares unsupported format `{format}`", path.display())]
    UnsupportedFormat { path: PathBuf, format: String },
}

/// The parsed package.xml manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Manifest format (1, 2 or 3)
    pub format: u8,

    /// Package name
    pub name: String,

    /// Package version, kept verbatim
    pub version: String,

    /// Build dependencies in declaration order
    pub build_depends: Vec<Dependency>,
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse manifest contents. `path` is only used for error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ManifestError> {
        let doc = roxmltree::Document::parse(contents).map_err(|source| ManifestError::Xml {
            path: path.to_path_buf(),
            source,
        })?;

        let root = doc.root_element();
        if !root.has_tag_name("package") {
            return Err(ManifestError::NotAPackage {
                path: path.to_path_buf(),
            });
        }

        let format = match root.attribute("format") {
            None => 1,
            Some(raw) => match raw.trim().parse::<u8>() {
                Ok(f @ 1..=3) => f,
                _ => {
                    return Err(ManifestError::UnsupportedFormat {
                        path: path.to_path_buf(),
                        format: raw.to_string(),
                    })
                }
            },
        };

        let child_text = |tag: &str| {
            root.children()
                .find(|n| n.has_tag_name(tag))
                .and_then(|n| n.text())
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        };

        let name = child_text("name").ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            element: "name",
        })?;
        let version = child_text("version").ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            element: "version",
        })?;

        // <depend> only exists from format 2 onwards and implies a build dependency.
        let mut build_depends: Vec<Dependency> = Vec::new();
        for node in root.children().filter(|n| {
            n.has_tag_name("build_depend") || (format >= 2 && n.has_tag_name("depend"))
        }) {
            let Some(dep_name) = node.text().map(str::trim).filter(|t| !t.is_empty()) else {
                continue;
            };
            if build_depends.iter().any(|d| d.name() == dep_name) {
                continue;
            }

            let mut dep = Dependency::new(dep_name);
            for op in VersionOp::ALL {
                if let Some(version) = node.attribute(op.attribute()) {
                    dep = dep.with_constraint(op, version.trim());
                }
            }
            build_depends.push(dep);
        }

        Ok(Manifest {
            format,
            name,
            version,
            build_depends,
        })
    }
}

/// Generate a minimal manifest. Used to lay out fixture workspaces.
pub fn generate_manifest(name: &str, version: &str, build_depends: &[&str]) -> String {
    let mut deps = String::new();
    for dep in build_depends {
        deps.push_str(&format!("  <build_depend>{}</build_depend>\n", dep));
    }

    format!(
        r#"<?xml version="1.0"?>
<package format="2">
  <name>{name}</name>
  <version>{version}</version>
  <description>The {name} package</description>
  <maintainer email="dev@example.com">Developer</maintainer>
  <license>BSD</license>
  <buildtool_depend>catkin</buildtool_depend>
{deps}</package>
"#,
        name = name,
        version = version,
        deps = deps
    )
}
