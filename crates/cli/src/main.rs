use clap::{command, Parser, Subcommand};
use pramb_cli_common::{
    config::{init_global_config, GlobalConfig},
    error::log_error,
    logger,
};
use xshell::Shell;

use crate::commands::{config_cmd::ConfigCommands, deploy::DeployArgs};

mod commands;
mod forge_ctx;
mod utils;

#[derive(Parser, Debug)]
#[command(name = "pramb-cli", about)]
struct PrambCli {
    #[command(subcommand)]
    command: PrambCliSubcommands,
    #[clap(flatten)]
    global: PrambCliGlobalArgs,
}

#[derive(Subcommand, Debug)]
pub enum PrambCliSubcommands {
    /// Deploy the PrambCover contract
    Deploy(DeployArgs),
    /// Inspect or emit the build framework configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Parser, Debug)]
#[clap(next_help_heading = "Global options")]
struct PrambCliGlobalArgs {
    /// Verbose mode
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    human_panic::setup_panic!();
    // Secrets may live in a local .env file next to the checkout.
    dotenvy::dotenv().ok();
    let cli_args = PrambCli::parse();
    match run_subcommand(cli_args).await {
        Ok(_) => {}
        Err(error) => {
            log_error(error);
            std::process::exit(1);
        }
    }
    Ok(())
}

async fn run_subcommand(cli_args: PrambCli) -> anyhow::Result<()> {
    logger::new_empty_line();
    logger::intro();

    init_global_config(GlobalConfig {
        verbose: cli_args.global.verbose,
    });
    let shell = Shell::new()?;

    match cli_args.command {
        PrambCliSubcommands::Deploy(args) => commands::deploy::run(args, &shell).await?,
        PrambCliSubcommands::Config(args) => commands::config_cmd::run(args, &shell).await?,
    }
    Ok(())
}
