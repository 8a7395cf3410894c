//! revue-check - ordered end-to-end checks for the Revue CRUD API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod suite;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Route `log` output to stderr; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Run { only, fail_fast } => cli::run::run(&opts, only, fail_fast).await,
        Commands::Scenarios => cli::scenarios::list(opts.format),
        Commands::Login { save } => cli::login::run(&opts, save).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("revue-check version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
