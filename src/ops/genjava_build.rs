//! Implementation of `genjava build` and `genjava standalone`.

use std::path::Path;

use anyhow::Result;

use crate::builder::gradle;
use crate::core::Workspace;
use crate::ops::genjava_create::{create, CreateOptions};

/// Result of generating and building a project in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Gradle exited with 0
    Built,
    /// The project already existed and rebuilding was not wanted
    Skipped,
    /// Gradle exited with this non-zero code
    Failed(i32),
}

impl BuildOutcome {
    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            BuildOutcome::Built
        } else {
            BuildOutcome::Failed(code)
        }
    }

    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            BuildOutcome::Built | BuildOutcome::Skipped => 0,
            BuildOutcome::Failed(code) => code,
        }
    }
}

/// Options for `create_and_build`.
#[derive(Debug, Clone)]
pub struct StandaloneOptions {
    pub create: CreateOptions,

    /// Leave an existing project directory alone instead of regenerating it
    pub avoid_rebuilding: bool,
}

/// Build a previously generated project and return Gradle's exit code.
///
/// No freshness checks are made; `create` must have run before.
pub fn build(ws: &Workspace, name: &str, output_dir: &Path, verbose: bool) -> Result<i32> {
    let project_dir = Workspace::project_dir(output_dir, name);
    let wrapper = ws.gradle_wrapper()?;
    tracing::debug!("using gradle wrapper {}", wrapper.display());
    gradle::run(&wrapper, &project_dir, verbose)
}

/// Generate a project and build it straight away.
///
/// Gradle is started once; the `info` task of a verbose `build` is not run.
pub fn create_and_build(ws: &Workspace, opts: &StandaloneOptions) -> Result<BuildOutcome> {
    let project_dir = opts.create.project_dir();
    if opts.avoid_rebuilding && project_dir.exists() {
        tracing::info!(
            "{} already exists, skipping (avoid rebuilding)",
            project_dir.display()
        );
        return Ok(BuildOutcome::Skipped);
    }

    let project_dir = create(ws, &opts.create)?;
    let wrapper = ws.gradle_wrapper()?;
    let code = gradle::build_once(&wrapper, &project_dir, opts.create.verbose)?;
    Ok(BuildOutcome::from_exit_code(code))
}
