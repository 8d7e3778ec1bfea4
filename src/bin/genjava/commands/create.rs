//! `genjava create` command

use anyhow::Result;

use crate::cli::{CreateArgs, GlobalArgs};
use genjava::ops::{create, CreateOptions};
use genjava::util::GlobalContext;

pub fn execute(global: &GlobalArgs, args: CreateArgs) -> Result<i32> {
    let ctx = super::context(global)?;
    let ws = super::workspace(global, &ctx);

    let opts = create_options(args, &ctx);
    let project_dir = create(&ws, &opts)?;

    eprintln!("     Created {}", project_dir.display());
    Ok(0)
}

pub(crate) fn create_options(args: CreateArgs, ctx: &GlobalContext) -> CreateOptions {
    CreateOptions {
        name: args.name,
        output_dir: ctx.resolve_path(&args.output_dir),
        sources_dir: args.sources_dir,
        verbose: ctx.is_verbose(),
        print_lists: args.print_lists,
    }
}
