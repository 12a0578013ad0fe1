use crate::constants::{verbosity, DEFAULT_TEMPLATE_ROOT};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for formwork.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a component entity from the entity template set.
    Entity(EntityArgs),
    /// Scaffold a page from the page template set.
    Page(PageArgs),
}

/// Arguments shared by the scaffold commands.
#[derive(Args, Debug, Clone)]
pub struct SharedArgs {
    /// Site the generated files belong to. A single positional value is
    /// taken as the id instead.
    #[arg(value_name = "SITE")]
    pub site: Option<String>,

    /// Id or name of the generated files.
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    /// Root directory containing the template sets.
    #[arg(long, default_value = DEFAULT_TEMPLATE_ROOT)]
    pub templates: PathBuf,

    /// Base folder where generated files are written.
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Fail instead of prompting when a value is missing.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Keep files that already exist in the destination.
    #[arg(long = "keep-existing")]
    pub keep_existing: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EntityArgs {
    #[command(flatten)]
    pub shared: SharedArgs,

    /// Enable the generated JavaScript bootstrap.
    #[arg(long)]
    pub javascript: bool,

    /// Disable the generated JavaScript bootstrap.
    #[arg(long = "no-javascript")]
    pub no_javascript: bool,
}

impl EntityArgs {
    /// Resolves the javascript flag pair; an explicit disable wins.
    pub fn javascript_enabled(&self) -> Option<bool> {
        match (self.javascript, self.no_javascript) {
            (_, true) => Some(false),
            (true, false) => Some(true),
            (false, false) => None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    #[command(flatten)]
    pub shared: SharedArgs,
}

/// Parse command line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
