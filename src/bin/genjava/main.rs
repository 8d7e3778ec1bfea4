//! genjava CLI - Gradle projects for ROS message packages

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use genjava::builder::{GradleError, TemplateError};
use genjava::resolver::ResolveError;
use genjava::util::diagnostic::emit;

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.global.verbose {
        EnvFilter::new("genjava=debug")
    } else {
        EnvFilter::new("genjava=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.global.no_color;
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report(e, color);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let global = cli.global;
    match cli.command {
        Commands::Create(args) => commands::create::execute(&global, args),
        Commands::Build(args) => commands::build::execute(&global, args),
        Commands::Standalone(args) => commands::standalone::execute(&global, args),
        Commands::List(args) => commands::list::execute(&global, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print an error, as a diagnostic when it has one.
fn report(err: anyhow::Error, color: bool) {
    if let Some(e) = err.downcast_ref::<ResolveError>() {
        emit(&e.to_diagnostic(), color);
        return;
    }
    if let Some(e) = err.downcast_ref::<GradleError>() {
        emit(&e.to_diagnostic(), color);
        return;
    }
    match err.downcast::<TemplateError>() {
        Ok(e) => eprintln!("{:?}", miette::Report::new(e)),
        Err(err) => eprintln!("error: {:#}", err),
    }
}
