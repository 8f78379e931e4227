use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{export_command, resolve_command};

#[derive(Parser, Debug)]
#[command(name = "idea-plugin")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug                     Enable debug logging\n    PANTS_BUILDROOT_OVERRIDE=<PATH>    Use PATH as the build root")]
pub struct IdeaPlugin {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an IDE project for the given address specs
    #[command(visible_alias = "e")]
    Export(ExportArgs),
    /// Print how the given address specs resolve, without writing anything
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Address specs, e.g. src/app:bin, src/lib: or src::
    pub specs: Vec<String>,

    /// File that receives the path of the generated project directory
    #[arg(long, value_name = "PATH")]
    pub output_file: PathBuf,

    /// Incremental import depth handed to the IDE plugin
    #[arg(long, value_name = "INT", allow_negative_numbers = true)]
    pub incremental_import: Option<i64>,

    /// Ask the IDE plugin to import dependencies as jars
    #[arg(long)]
    pub dep_as_jar: bool,

    /// Open the project in the IDE afterwards (handled by the caller)
    #[arg(long, overrides_with = "no_open")]
    pub open: bool,

    /// Do not open the project in the IDE
    #[arg(long, overrides_with = "open")]
    pub no_open: bool,

    /// Build root to resolve specs against (defaults to discovery from the current directory)
    #[arg(long, value_name = "PATH")]
    pub build_root: Option<PathBuf>,

    /// Name of the generated project directory (defaults to one derived from the specs)
    #[arg(long)]
    pub project_name: Option<String>,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Address specs, e.g. src/app:bin, src/lib: or src::
    pub specs: Vec<String>,

    /// Build root to resolve specs against (defaults to discovery from the current directory)
    #[arg(long, value_name = "PATH")]
    pub build_root: Option<PathBuf>,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Export(args) => export_command(args),
            Commands::Resolve(args) => resolve_command(args),
        }
    }
}
