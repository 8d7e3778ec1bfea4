//! genjava - Gradle projects for ROS message packages
//!
//! This crate scans layered ROS workspaces for message packages, generates
//! a Gradle project per message package and drives the Gradle wrapper that
//! builds it.

pub mod builder;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod sources;
pub mod util;

/// Fixture builders for genjava unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{
    dependency::Dependency, manifest::Manifest, package::Package, workspace::SearchPaths,
    workspace::Workspace,
};

pub use resolver::MessagePackageIndex;
pub use util::context::GlobalContext;
