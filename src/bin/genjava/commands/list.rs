//! `genjava list` command

use anyhow::Result;

use crate::cli::{GlobalArgs, ListArgs};
use genjava::ops::{format_classification_lists, format_index};

pub fn execute(global: &GlobalArgs, args: ListArgs) -> Result<i32> {
    let ctx = super::context(global)?;
    let ws = super::workspace(global, &ctx);

    if args.print_lists {
        print!("{}", format_classification_lists(ws.classification()));
    }
    print!("{}", format_index(&ws.message_index(), ctx.is_verbose()));
    Ok(0)
}
