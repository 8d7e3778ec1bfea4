//! Project generation and build execution.
//!
//! - `template`: renders the Gradle project files of a message package
//! - `author`: resolves the author named in generated files
//! - `gradle`: locates the Gradle wrapper and runs it

pub mod author;
pub mod gradle;
pub mod template;

pub use author::{author_name, resolve_author, AccountLookup, SystemAccount};
pub use gradle::{GradleError, GradleInvocation};
pub use template::{
    normalize_sources_dir, populate_project, ProjectParams, TemplateError, TemplateSet,
    BUILD_GRADLE,
};
