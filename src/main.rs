use anyhow::Result;
use clap::Parser;

use sprout::cli::handlers::{self, BootstrapParams};
use sprout::cli::{Cli, Commands};
use sprout::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Help) => handlers::handle_help(),
        Some(Commands::List { json }) => handlers::handle_list(json),
        None => handlers::handle_bootstrap(BootstrapParams {
            remove: cli.remove,
            add: cli.add,
            name: cli.name,
            dir: cli.dir,
            dry_run: cli.dry_run,
            json: cli.json,
        }),
    }
}
