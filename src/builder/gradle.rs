//! Gradle build driver.
//!
//! Every invocation runs with `--no-daemon`: separate genjava runs must not
//! share a long-lived Gradle daemon that could serve stale cached results.

use std::path::{Path, PathBuf};

use anyhow::Result;
use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::sources::find_packages;
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::process::{exit_code, find_executable, ProcessBuilder};

/// Package that ships the Gradle wrapper.
pub const WRAPPER_PACKAGE: &str = "rosjava_build_tools";

/// Location of the wrapper inside [`WRAPPER_PACKAGE`].
pub const WRAPPER_RELATIVE_PATH: [&str; 2] = ["gradle", "gradlew"];

/// Environment variable naming an explicit wrapper.
pub const WRAPPER_ENV: &str = "GENJAVA_GRADLE_WRAPPER";

/// Error locating the Gradle wrapper.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GradleError {
    #[error("could not find the Gradle wrapper: package `rosjava_build_tools` is not in any of {searched} search paths")]
    #[diagnostic(code(genjava::gradle::package_missing))]
    PackageNotFound { searched: usize },

    #[error("Gradle wrapper not found at {}", path.display())]
    #[diagnostic(code(genjava::gradle::wrapper_missing))]
    WrapperMissing { path: PathBuf },
}

impl GradleError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());
        let diag = match self {
            GradleError::PackageNotFound { .. } => diag.with_suggestion(format!(
                "Add the workspace containing `{}` to ROS_PACKAGE_PATH",
                WRAPPER_PACKAGE
            )),
            GradleError::WrapperMissing { path } => diag.with_location(path),
        };
        diag.with_suggestion(suggestions::GRADLE_WRAPPER)
    }
}

/// Find the wrapper shipped with the build tools package.
///
/// Overlays are honoured: the last search path holding the package wins.
pub fn locate_wrapper(search_paths: &[PathBuf]) -> Result<PathBuf, GradleError> {
    let package = search_paths
        .iter()
        .rev()
        .find_map(|path| find_packages(path).into_iter().find(|p| p.name() == WRAPPER_PACKAGE))
        .ok_or(GradleError::PackageNotFound {
            searched: search_paths.len(),
        })?;

    let wrapper = WRAPPER_RELATIVE_PATH
        .iter()
        .fold(package.root().to_path_buf(), |path, part| path.join(part));
    if !wrapper.is_file() {
        return Err(GradleError::WrapperMissing { path: wrapper });
    }
    Ok(wrapper)
}

/// Validate an explicitly configured wrapper. Bare names are looked up in PATH.
pub fn resolve_explicit_wrapper(wrapper: &Path) -> Result<PathBuf, GradleError> {
    if wrapper.is_file() {
        return Ok(wrapper.to_path_buf());
    }

    let is_bare_name = wrapper.components().count() == 1;
    if is_bare_name {
        if let Some(found) = wrapper.to_str().and_then(find_executable) {
            return Ok(found);
        }
    }

    Err(GradleError::WrapperMissing {
        path: wrapper.to_path_buf(),
    })
}

/// One Gradle run against a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleInvocation {
    build: ProcessBuilder,
    info: ProcessBuilder,
}

impl GradleInvocation {
    /// Describe the commands for building `project_dir`.
    pub fn new(wrapper: &Path, project_dir: &Path, verbose: bool) -> Self {
        let base = ProcessBuilder::new(wrapper)
            .arg("-p")
            .arg(project_dir)
            .args(["--console=plain", "--no-daemon"]);

        let build = if verbose {
            base.clone()
        } else {
            base.clone().arg("--quiet")
        };
        let info = build.clone().arg("info");

        GradleInvocation { build, info }
    }

    /// The build command.
    pub fn build_command(&self) -> &ProcessBuilder {
        &self.build
    }

    /// The diagnostic `info` command run before verbose builds.
    pub fn info_command(&self) -> &ProcessBuilder {
        &self.info
    }
}

/// Run Gradle against `project_dir` and relay its exit code.
///
/// When verbose, the project's `info` task runs first (its result is
/// ignored). A non-zero exit code is returned, not raised; only failing to
/// start the wrapper is an error.
pub fn run(wrapper: &Path, project_dir: &Path, verbose: bool) -> Result<i32> {
    let invocation = GradleInvocation::new(wrapper, project_dir, verbose);

    if verbose {
        match invocation.info_command().status() {
            Ok(status) => tracing::debug!("gradle info exited with {}", exit_code(status)),
            Err(e) => tracing::warn!("gradle info failed: {:#}", e),
        }
    }

    run_build(&invocation, verbose)
}

/// Run only the build command of `project_dir`, without the `info` task.
pub fn build_once(wrapper: &Path, project_dir: &Path, verbose: bool) -> Result<i32> {
    run_build(&GradleInvocation::new(wrapper, project_dir, verbose), verbose)
}

fn run_build(invocation: &GradleInvocation, verbose: bool) -> Result<i32> {
    if verbose {
        tracing::info!("calling command: {}", invocation.build_command().display_command());
    }
    let status = invocation.build_command().status()?;
    Ok(exit_code(status))
}
