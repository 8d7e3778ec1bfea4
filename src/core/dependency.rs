//! Dependency references.
//!
//! A Dependency is one `<build_depend>` (or `<depend>`) entry from a
//! package manifest: the name of another package plus an optional version
//! constraint. Constraints are kept for display but never evaluated.

use std::fmt;
use std::str::FromStr;

/// Comparison operator of a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOp {
    Lt,
    Lte,
    Eq,
    Gte,
    Gt,
}

impl VersionOp {
    /// All operators, in the order their manifest attributes are checked.
    pub const ALL: [VersionOp; 5] = [
        VersionOp::Lt,
        VersionOp::Lte,
        VersionOp::Eq,
        VersionOp::Gte,
        VersionOp::Gt,
    ];

    /// The manifest attribute carrying this operator (e.g. `version_gte`).
    pub fn attribute(&self) -> &'static str {
        match self {
            VersionOp::Lt => "version_lt",
            VersionOp::Lte => "version_lte",
            VersionOp::Eq => "version_eq",
            VersionOp::Gte => "version_gte",
            VersionOp::Gt => "version_gt",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            VersionOp::Lt => "<",
            VersionOp::Lte => "<=",
            VersionOp::Eq => "=",
            VersionOp::Gte => ">=",
            VersionOp::Gt => ">",
        }
    }
}

impl FromStr for VersionOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionOp::ALL
            .into_iter()
            .find(|op| op.attribute() == s || op.symbol() == s)
            .ok_or_else(|| format!("unknown version operator: {}", s))
    }
}

/// A version constraint attached to a dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub op: VersionOp,
    pub version: String,
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op.symbol(), self.version)
    }
}

/// A declared build dependency of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    constraints: Vec<VersionConstraint>,
}

impl Dependency {
    /// Create an unconstrained dependency.
    pub fn new(name: impl Into<String>) -> Self {
        Dependency {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Add a version constraint.
    pub fn with_constraint(mut self, op: VersionOp, version: impl Into<String>) -> Self {
        self.constraints.push(VersionConstraint {
            op,
            version: version.into(),
        });
        self
    }

    /// Get the name of the depended-upon package.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the version constraints, in manifest attribute order.
    pub fn constraints(&self) -> &[VersionConstraint] {
        &self.constraints
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (i, c) in self.constraints.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{}", sep, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_display() {
        let dep = Dependency::new("std_msgs");
        assert_eq!(dep.to_string(), "std_msgs");

        let dep = Dependency::new("geometry_msgs")
            .with_constraint(VersionOp::Gte, "1.11.0")
            .with_constraint(VersionOp::Lt, "2.0.0");
        assert_eq!(dep.to_string(), "geometry_msgs >= 1.11.0, < 2.0.0");
        assert_eq!(dep.constraints().len(), 2);
    }

    #[test]
    fn test_version_op_parse() {
        assert_eq!("version_lte".parse::<VersionOp>().unwrap(), VersionOp::Lte);
        assert_eq!(">".parse::<VersionOp>().unwrap(), VersionOp::Gt);
        assert!("version_about".parse::<VersionOp>().is_err());
    }
}
