//! Resolution error types and diagnostics.

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error looking up a package in the message package index.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("could not find `{package}` among message packages")]
    PackageNotFound {
        package: String,
        /// Indexed names close to the requested one
        similar: Vec<String>,
    },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::PackageNotFound { package, similar } => {
                let mut diag = Diagnostic::error(format!(
                    "could not find `{}` among message packages",
                    package
                ));

                if !similar.is_empty() {
                    diag = diag.with_context(format!("did you mean: {}?", similar.join(", ")));
                }

                diag.with_suggestion(format!(
                    "Check that `{}` has a <build_depend> on message_generation in its package.xml",
                    package
                ))
                .with_suggestion(suggestions::CHECK_PACKAGE_PATH)
                .with_suggestion(suggestions::LIST_PACKAGES)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_not_found_diagnostic() {
        let err = ResolveError::PackageNotFound {
            package: "foo_msg".to_string(),
            similar: vec!["foo_msgs".to_string()],
        };

        assert_eq!(err.to_string(), "could not find `foo_msg` among message packages");

        let output = err.to_diagnostic().format(false);
        assert!(output.contains("error: could not find `foo_msg`"));
        assert!(output.contains("did you mean: foo_msgs?"));
        assert!(output.contains("<build_depend> on message_generation"));
    }
}
