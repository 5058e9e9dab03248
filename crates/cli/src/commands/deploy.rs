use clap::Parser;
use ethers::types::{Address, H256};
use pramb_cli_common::{
    forge::{ForgeArgs, ForgeRunner},
    logger,
};
use pramb_cli_config::{
    forge_interface::{
        deploy_pramb_cover::{
            input::{DeployParams, DeployPrambCoverInput},
            output::DeployPrambCoverOutput,
        },
        script_params::DEPLOY_PRAMB_COVER_SCRIPT_PARAMS,
    },
    NetworkConfig, SolcConfig,
};
use pramb_cli_types::L1Network;
use serde::{Deserialize, Serialize};
use serde_json::json;
use xshell::Shell;

use crate::forge_ctx::{resolve_execution, ForgeContext};
use crate::utils::paths;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
pub struct DeployArgs {
    #[clap(long, help = "Override the _admin constructor argument")]
    pub admin: Option<Address>,
    #[clap(long, help = "Override the _treasury constructor argument")]
    pub treasury: Option<Address>,

    // Common flags
    #[clap(long, value_enum, default_value_t = L1Network::Sepolia, help = "Target network")]
    pub network: L1Network,
    #[clap(long, help = "RPC URL (default: the configured endpoint for --network)")]
    pub rpc_url: Option<String>,
    #[clap(long, visible_alias = "pk", help = "Sender private key")]
    pub private_key: Option<H256>,
    #[clap(long, help = "Sender address")]
    pub sender: Option<Address>,
    #[clap(long, help = "Simulate against an anvil fork (no on-chain changes)")]
    pub simulate: bool,
    #[clap(flatten)]
    #[serde(flatten)]
    pub forge_args: ForgeArgs,

    // Dev options
    #[clap(long, help = "Use dev defaults", default_value_t = false, help_heading = "Dev options")]
    pub dev: bool,
}

pub async fn run(args: DeployArgs, shell: &Shell) -> anyhow::Result<()> {
    let contracts_path = paths::contracts_root();

    let networks = NetworkConfig::from_env();
    let rpc_url = match &args.rpc_url {
        Some(url) => url.clone(),
        None => resolve_network_url(&networks, args.network),
    };

    let (auth, sender, execution_mode) =
        resolve_execution(args.private_key, args.sender, args.dev, args.simulate, &rpc_url)?;

    let is_simulation = execution_mode.is_simulation();
    if is_simulation {
        logger::info(format!("Simulation mode: forking {} via anvil", rpc_url));
    }

    // In simulation mode, forge targets the anvil fork instead of the original RPC.
    let effective_rpc = execution_mode.rpc_url(&rpc_url);

    let solc = SolcConfig::pinned();
    let mut runner = ForgeRunner::new();
    let mut ctx = ForgeContext {
        shell,
        contracts_path: contracts_path.as_path(),
        runner: &mut runner,
        forge_args: &args.forge_args.script,
        rpc_url: effective_rpc,
        auth: &auth,
        solc: &solc,
    };

    let input = DeployPrambCoverInput::new(&DeployParams {
        admin: args.admin,
        treasury: args.treasury,
    });

    logger::info("Deploying PrambCover...");
    let output: DeployPrambCoverOutput = ctx.run(&DEPLOY_PRAMB_COVER_SCRIPT_PARAMS, &input)?;

    let report = build_report(args.network, is_simulation, sender, &input, &output, ctx.runner);
    let report_json = serde_json::to_string_pretty(&report)?;
    if let Some(out_path) = &args.forge_args.runner.out {
        std::fs::write(out_path, &report_json)?;
        logger::info(format!("Report written to: {}", out_path.display()));
    } else {
        println!("{}", report_json);
    }

    if is_simulation {
        logger::outro("PrambCover deploy simulation complete (no on-chain changes)");
    } else {
        logger::outro(format!("PrambCover deployed at {:#x}", output.pramb_cover));
    }

    drop(execution_mode);

    Ok(())
}

/// URL for the target network: the configured profile if one exists,
/// otherwise the network's bare endpoint.
fn resolve_network_url(networks: &NetworkConfig, network: L1Network) -> String {
    networks
        .get(&network.to_string())
        .map(|profile| profile.url.clone())
        .unwrap_or_else(|| network.rpc_url(""))
}

fn build_report(
    network: L1Network,
    simulation: bool,
    sender: Address,
    input: &DeployPrambCoverInput,
    output: &DeployPrambCoverOutput,
    runner: &ForgeRunner,
) -> serde_json::Value {
    let runs: Vec<_> = runner
        .runs()
        .iter()
        .map(|run| {
            json!({
                "script": run.script,
                "args": run.args,
            })
        })
        .collect();

    json!({
        "command": "deploy",
        "network": network.to_string(),
        "simulation": simulation,
        "sender": format!("{:#x}", sender),
        "constructor_args": {
            "_admin": format!("{:#x}", input.admin),
            "_treasury": format!("{:#x}", input.treasury),
        },
        "artifacts": {
            "pramb_cover": format!("{:#x}", output.pramb_cover),
        },
        "runs": runs,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pramb_cli_config::NetworkProfile;

    use super::*;

    fn sepolia_only() -> NetworkConfig {
        let mut networks = BTreeMap::new();
        networks.insert("sepolia".to_string(), NetworkProfile::sepolia("key", ""));
        NetworkConfig { networks }
    }

    #[test]
    fn network_url_prefers_the_configured_profile() {
        let networks = sepolia_only();
        assert_eq!(
            resolve_network_url(&networks, L1Network::Sepolia),
            "https://sepolia.infura.io/v3/key"
        );
        assert_eq!(
            resolve_network_url(&networks, L1Network::Localhost),
            "http://localhost:8545"
        );
    }

    #[test]
    fn report_carries_ordered_constructor_args_and_the_handle() {
        let admin: Address = "0x0000000000000000000000000000000000000001".parse().unwrap();
        let treasury: Address = "0x0000000000000000000000000000000000000002".parse().unwrap();
        let deployed: Address = "0x00000000000000000000000000000000000000aa".parse().unwrap();

        let input = DeployPrambCoverInput {
            admin,
            treasury,
        };
        let output = DeployPrambCoverOutput {
            pramb_cover: deployed,
        };
        let runner = ForgeRunner::new();

        let report = build_report(L1Network::Sepolia, false, admin, &input, &output, &runner);
        assert_eq!(report["network"], "sepolia");
        assert_eq!(
            report["constructor_args"]["_admin"],
            "0x0000000000000000000000000000000000000001"
        );
        assert_eq!(
            report["constructor_args"]["_treasury"],
            "0x0000000000000000000000000000000000000002"
        );
        assert_eq!(
            report["artifacts"]["pramb_cover"],
            "0x00000000000000000000000000000000000000aa"
        );
    }
}
