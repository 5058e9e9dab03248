use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pramb_cli_common::logger;
use pramb_cli_config::{
    FoundryDescriptor, NetworkConfig, SolcConfig, FOUNDRY_DESCRIPTOR_FILE,
};
use serde_json::json;
use xshell::Shell;

use crate::utils::paths;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the resolved framework configuration
    Show(ConfigShowArgs),
    /// Write the foundry.toml descriptor for the build framework
    Write(ConfigWriteArgs),
}

#[derive(Debug, Parser)]
pub struct ConfigShowArgs {}

#[derive(Debug, Parser)]
pub struct ConfigWriteArgs {
    /// Destination (default: <contracts root>/foundry.toml)
    #[clap(long)]
    pub out: Option<PathBuf>,
}

pub(crate) async fn run(args: ConfigCommands, shell: &Shell) -> anyhow::Result<()> {
    match args {
        ConfigCommands::Show(args) => show(args),
        ConfigCommands::Write(args) => write(args, shell),
    }
}

fn show(_args: ConfigShowArgs) -> anyhow::Result<()> {
    let solc = SolcConfig::pinned();
    let networks = NetworkConfig::from_env();

    let resolved = json!({
        "solidity": solc,
        "networks": networks.redacted().networks,
    });
    println!("{}", serde_json::to_string_pretty(&resolved)?);

    logger::outro("Configuration resolved");
    Ok(())
}

fn write(args: ConfigWriteArgs, shell: &Shell) -> anyhow::Result<()> {
    let solc = SolcConfig::pinned();
    let networks = NetworkConfig::from_env();
    let descriptor = FoundryDescriptor::new(&solc, &networks);

    let path = args
        .out
        .unwrap_or_else(|| paths::path_from_root(FOUNDRY_DESCRIPTOR_FILE));
    shell.write_file(&path, descriptor.to_toml()?)?;
    logger::info(format!("Descriptor written to: {}", path.display()));

    logger::outro("Configuration written");
    Ok(())
}
