//! `genjava standalone` command

use anyhow::Result;

use crate::cli::{GlobalArgs, StandaloneArgs};
use genjava::ops::{create_and_build, BuildOutcome, StandaloneOptions};

pub fn execute(global: &GlobalArgs, args: StandaloneArgs) -> Result<i32> {
    let ctx = super::context(global)?;
    let ws = super::workspace(global, &ctx);

    let opts = StandaloneOptions {
        create: super::create::create_options(args.create, &ctx),
        avoid_rebuilding: args.avoid_rebuilding,
    };
    let outcome = create_and_build(&ws, &opts)?;

    match outcome {
        BuildOutcome::Built => eprintln!("    Finished {}", opts.create.name),
        BuildOutcome::Skipped => eprintln!("     Skipped {} (already generated)", opts.create.name),
        BuildOutcome::Failed(code) => super::report_gradle_failure(&ctx, code),
    }
    Ok(outcome.exit_code())
}
