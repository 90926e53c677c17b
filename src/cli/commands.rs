use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sprout")]
#[command(
    author,
    version,
    about = "Bootstrap new Django REST API projects from the command line"
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Exclude packages from the default install set
    #[arg(long, num_args = 1.., value_name = "PACKAGE")]
    pub remove: Vec<String>,

    /// Install extra packages on top of the default set
    #[arg(long, num_args = 1.., value_name = "PACKAGE")]
    pub add: Vec<String>,

    /// Project name passed to the generator (default: base)
    #[arg(long, value_name = "IDENT")]
    pub name: Option<String>,

    /// Create a fresh subdirectory and place everything inside it
    #[arg(long, value_name = "DIRNAME")]
    pub dir: Option<String>,

    /// Resolve and validate everything, print the plan, run nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Output the dry-run plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every command with a usage example
    Help,

    /// Print the default package list
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
