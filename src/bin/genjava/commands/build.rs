//! `genjava build` command

use anyhow::Result;

use crate::cli::{BuildArgs, GlobalArgs};
use genjava::ops::build;

pub fn execute(global: &GlobalArgs, args: BuildArgs) -> Result<i32> {
    let ctx = super::context(global)?;
    let ws = super::workspace(global, &ctx);

    let output_dir = ctx.resolve_path(&args.output_dir);
    let code = build(&ws, &args.name, &output_dir, ctx.is_verbose())?;
    if code != 0 {
        super::report_gradle_failure(&ctx, code);
    }
    Ok(code)
}
