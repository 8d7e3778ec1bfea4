//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// genjava - Generate and build Gradle projects for ROS message packages
#[derive(Parser)]
#[command(name = "genjava")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Package search paths, overlays first (`:` or `;` separated)
    #[arg(long, global = true, env = "ROS_PACKAGE_PATH", value_name = "PATHS")]
    pub package_path: Option<String>,

    /// Gradle wrapper to build with instead of the one from rosjava_build_tools
    #[arg(long, global = true, env = "GENJAVA_GRADLE_WRAPPER", value_name = "PATH")]
    pub gradle_wrapper: Option<PathBuf>,

    /// Always treat these packages as message packages
    #[arg(long, global = true, value_delimiter = ',', value_name = "NAMES")]
    pub whitelist: Vec<String>,

    /// Never treat these packages as message packages
    #[arg(long, global = true, value_delimiter = ',', value_name = "NAMES")]
    pub blacklist: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Gradle project of a message package
    Create(CreateArgs),

    /// Build a previously generated project
    Build(BuildArgs),

    /// Generate a project and build it
    Standalone(StandaloneArgs),

    /// List the message packages found in the search paths
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CreateArgs {
    /// Message package name
    pub name: String,

    /// Directory to generate the project in
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Extra message source paths (`:` or `;` separated)
    #[arg(long)]
    pub sources_dir: Option<String>,

    /// Print the whitelist and blacklist (and the index, with --verbose)
    #[arg(long)]
    pub print_lists: bool,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Message package name
    pub name: String,

    /// Directory the project was generated in
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct StandaloneArgs {
    #[command(flatten)]
    pub create: CreateArgs,

    /// Skip packages whose project directory already exists
    #[arg(long)]
    pub avoid_rebuilding: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Also print the whitelist and blacklist
    #[arg(long)]
    pub print_lists: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
