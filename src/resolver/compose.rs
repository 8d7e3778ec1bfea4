//! Dependency block composition for generated build files.

use std::fmt;

use crate::resolver::errors::ResolveError;
use crate::resolver::index::MessagePackageIndex;

/// Maven group that generated message artifacts are published under.
pub const DEFAULT_ARTIFACT_GROUP: &str = "org.ros.rosjava_messages";

/// Gradle configuration the dependency lines are declared in.
const DEPENDENCY_CONFIGURATION: &str = "compile";

/// A Maven coordinate, `group:name:version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate<'a> {
    pub group: &'a str,
    pub name: &'a str,
    pub version: &'a str,
}

impl fmt::Display for Coordinate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Coordinates of the target's build dependencies that are message
/// packages, in declaration order.
pub fn message_dependencies<'a>(
    target: &str,
    index: &'a MessagePackageIndex,
    group: &'a str,
) -> Result<Vec<Coordinate<'a>>, ResolveError> {
    let package = index.require(target)?;

    Ok(package
        .build_depends()
        .iter()
        .filter_map(|dep| index.get(dep.name()))
        .map(|found| Coordinate {
            group,
            name: found.name(),
            version: found.version(),
        })
        .collect())
}

/// Compose the dependency block of the target's build file.
///
/// One newline-terminated line per build dependency that is itself in the
/// index. Dependencies outside the index (including the message generation
/// trigger) are dropped. The result is empty when nothing qualifies.
pub fn compose_dependencies(
    target: &str,
    index: &MessagePackageIndex,
    group: &str,
) -> Result<String, ResolveError> {
    let mut block = String::new();
    for coordinate in message_dependencies(target, index, group)? {
        block.push_str(&format!("  {} '{}'\n", DEPENDENCY_CONFIGURATION, coordinate));
    }
    Ok(block)
}
