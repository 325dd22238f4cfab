mod cli;
mod client;
mod commands;
mod config;
mod error;
mod mention;
mod middleware;
mod output;
mod response;
mod responses;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::ScryfallClient;
use config::Config;
use error::Result;
use response::ResponseKind;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let verbose = cli.verbose;
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays clean. `SCRY_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "scry=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SCRY_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "scry", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = ScryfallClient::from_config(&config)?;

            match command {
                Commands::Text(args) => {
                    commands::lookup::run(&client, ResponseKind::Text, &args.card_name()).await;
                }
                Commands::Image(args) => {
                    commands::lookup::run(&client, ResponseKind::Image, &args.card_name()).await;
                }
                Commands::Price(args) => {
                    commands::lookup::run(&client, ResponseKind::Price, &args.card_name()).await;
                }
                Commands::Multi(args) => {
                    commands::lookup::run(&client, ResponseKind::Multi, &args.card_name()).await;
                }
                Commands::Message { text } => {
                    commands::message::run(&client, &text).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
