//! Command implementations

pub mod build;
pub mod completions;
pub mod create;
pub mod list;
pub mod standalone;

use anyhow::Result;

use crate::cli::GlobalArgs;
use genjava::core::{SearchPaths, Workspace};
use genjava::util::diagnostic::{emit, suggestions, Diagnostic};
use genjava::util::GlobalContext;

/// Create the global context for a command.
fn context(global: &GlobalArgs) -> Result<GlobalContext> {
    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(global.verbose);
    ctx.set_color(!global.no_color);
    Ok(ctx)
}

/// Assemble the workspace from configuration and command line.
///
/// Command line values win over the project config, which wins over the
/// global config. Classification lists from all three are unioned.
fn workspace(global: &GlobalArgs, ctx: &GlobalContext) -> Workspace {
    let config = ctx.load_config();

    let search_paths = match &global.package_path {
        Some(value) => SearchPaths::from_package_path(value),
        None => SearchPaths::from_env(),
    };

    let mut classification = config.classification;
    classification.extend(global.whitelist.iter().cloned(), global.blacklist.iter().cloned());

    let mut ws = Workspace::new(search_paths)
        .with_classification(classification)
        .with_template_dir(config.templates.dir.map(|dir| ctx.resolve_path(&dir)))
        .with_gradle_wrapper(global.gradle_wrapper.clone().or(config.gradle.wrapper));
    if let Some(group) = config.artifact.group {
        ws = ws.with_artifact_group(group);
    }
    ws
}

/// Report a non-zero Gradle exit code. The code itself becomes the exit code.
fn report_gradle_failure(ctx: &GlobalContext, code: i32) {
    let mut diag = Diagnostic::error(format!("gradle exited with code {}", code));
    if !ctx.is_verbose() {
        diag = diag.with_suggestion(suggestions::BUILD_FAILED);
    }
    emit(&diag, ctx.color());
}
