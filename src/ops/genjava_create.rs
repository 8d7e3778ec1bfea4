//! Implementation of `genjava create`.

use std::path::PathBuf;

use anyhow::Result;

use crate::builder::template::populate_project;
use crate::core::Workspace;
use crate::ops::report::{format_classification_lists, format_index};
use crate::resolver::compose_dependencies;
use crate::util::fs::{ensure_dir, remove_dir_all_best_effort};

/// Options for generating a message package project.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Message package name
    pub name: String,

    /// Directory the project directory is created in
    pub output_dir: PathBuf,

    /// Extra message source paths, `:` or `;` separated
    pub sources_dir: Option<String>,

    /// Verbose output
    pub verbose: bool,

    /// Print the classification lists (and the index, when verbose)
    pub print_lists: bool,
}

impl CreateOptions {
    pub fn new(name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        CreateOptions {
            name: name.into(),
            output_dir: output_dir.into(),
            sources_dir: None,
            verbose: false,
            print_lists: false,
        }
    }

    /// The project directory, `output_dir/name`.
    pub fn project_dir(&self) -> PathBuf {
        Workspace::project_dir(&self.output_dir, &self.name)
    }
}

/// Generate the Gradle project of a message package.
///
/// Any previous project directory is removed first. Returns the freshly
/// created project directory.
pub fn create(ws: &Workspace, opts: &CreateOptions) -> Result<PathBuf> {
    let project_dir = opts.project_dir();
    if project_dir.exists() {
        tracing::debug!("removing previous project {}", project_dir.display());
        remove_dir_all_best_effort(&project_dir);
    }
    ensure_dir(&project_dir)?;

    let index = ws.message_index();
    if opts.print_lists {
        eprint!("{}", format_classification_lists(ws.classification()));
        if opts.verbose {
            eprint!("{}", format_index(&index, true));
        }
    }

    let package = index.require(&opts.name)?;
    let dependencies = compose_dependencies(&opts.name, &index, ws.artifact_group())?;
    let templates = ws.templates()?;
    populate_project(
        &templates,
        package,
        &project_dir,
        &dependencies,
        opts.sources_dir.as_deref(),
        ws.artifact_group(),
    )?;

    tracing::info!(
        "Create Message Package: {}:{}",
        package.name(),
        package.version()
    );
    Ok(project_dir)
}
