use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use ethers::types::{Address, H256};
use pramb_cli_common::anvil::{self, AnvilFork};
use pramb_cli_common::forge::{Forge, ForgeRunner, ForgeScriptArgs};
use pramb_cli_common::wallets::Wallet;
use pramb_cli_config::{
    forge_interface::script_params::ForgeScriptParams,
    traits::{ReadConfig, SaveConfig},
    SolcConfig, PRIVATE_KEY_ENV,
};
use xshell::Shell;

/// Anvil/Hardhat first default account private key.
/// Mnemonic: "test test test test test test test test test test test junk"
const DEV_PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// How the forge script authenticates transactions.
#[derive(Clone)]
pub enum SenderAuth {
    /// Sign with a private key (forge --private-key)
    PrivateKey(H256),
    /// Unlocked account on the node (forge --sender --unlocked)
    Unlocked(Address),
}

/// Whether the command is executing for real or simulating against an
/// anvil fork.
pub enum ExecutionMode {
    /// Broadcast transactions to the target RPC.
    Broadcast,
    /// Fork the target RPC with anvil, run against the fork, tear down on drop.
    Simulate(AnvilFork),
}

impl ExecutionMode {
    /// The RPC URL that forge scripts should target.
    pub fn rpc_url<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            ExecutionMode::Broadcast => original,
            ExecutionMode::Simulate(fork) => fork.rpc_url(),
        }
    }

    pub fn is_simulation(&self) -> bool {
        matches!(self, ExecutionMode::Simulate(_))
    }
}

/// Resolves authentication and execution mode from CLI args and the
/// environment.
///
/// Key lookup order: `--private-key` flag, then `--dev` (hardcoded anvil
/// key), then the `PRIVATE_KEY` variable (stored without the `0x` prefix).
/// A bare `--sender` runs against an implicit anvil fork; `--simulate`
/// always forks.
pub fn resolve_execution(
    private_key: Option<H256>,
    sender: Option<Address>,
    dev: bool,
    simulate: bool,
    rpc_url: &str,
) -> anyhow::Result<(SenderAuth, Address, ExecutionMode)> {
    let resolved_key = if let Some(pk) = private_key {
        Some(pk)
    } else if dev {
        Some(H256::from_str(DEV_PRIVATE_KEY)?)
    } else {
        env_private_key()?
    };

    let (resolved_addr, resolved_pk) = match (resolved_key, sender) {
        (Some(pk), maybe_sender) => {
            let wallet = Wallet::from_h256(pk)?;
            if let Some(sender) = maybe_sender {
                if sender != wallet.address {
                    anyhow::bail!(
                        "Sender address does not match private key: got {:#x}, want {:#x}",
                        sender,
                        wallet.address
                    );
                }
            }
            (wallet.address, Some(pk))
        }
        (None, Some(sender)) => (sender, None),
        (None, None) => anyhow::bail!(
            "No signing credential: pass --private-key, set {PRIVATE_KEY_ENV}, or use --dev/--sender"
        ),
    };

    match (simulate, resolved_pk) {
        (false, Some(pk)) => Ok((
            SenderAuth::PrivateKey(pk),
            resolved_addr,
            ExecutionMode::Broadcast,
        )),
        // `--simulate`, or no key at all: run against a fork with the
        // sender impersonated.
        _ => {
            let fork = anvil::fork(rpc_url)?;
            Ok((
                SenderAuth::Unlocked(resolved_addr),
                resolved_addr,
                ExecutionMode::Simulate(fork),
            ))
        }
    }
}

/// The env credential is stored without the `0x` prefix; the prefix is
/// added here, the same way the account string reaches the signer.
fn env_private_key() -> anyhow::Result<Option<H256>> {
    match std::env::var(PRIVATE_KEY_ENV) {
        Ok(raw) if !raw.is_empty() => {
            let prefixed = format!("0x{raw}");
            let pk = H256::from_str(&prefixed)
                .with_context(|| format!("{PRIVATE_KEY_ENV} is not a 32-byte hex key"))?;
            Ok(Some(pk))
        }
        _ => Ok(None),
    }
}

/// Common context for running forge scripts against the contracts checkout.
pub struct ForgeContext<'a> {
    pub shell: &'a Shell,
    pub contracts_path: &'a Path,
    pub runner: &'a mut ForgeRunner,
    pub forge_args: &'a ForgeScriptArgs,
    pub rpc_url: &'a str,
    pub auth: &'a SenderAuth,
    pub solc: &'a SolcConfig,
}

impl<'a> ForgeContext<'a> {
    /// Write input config, run the deploy script, read back its output.
    pub fn run<I: SaveConfig, O: ReadConfig>(
        &mut self,
        params: &ForgeScriptParams,
        input: &I,
    ) -> anyhow::Result<O> {
        // Write input config
        let input_path = params.input(self.contracts_path);
        input.save(self.shell, input_path)?;

        // Build forge command
        let mut forge = Forge::new(self.contracts_path)
            .script(&params.script(), self.forge_args.clone())
            .with_ffi()
            .with_rpc_url(self.rpc_url.to_string())
            .with_broadcast()
            .with_slow()
            .with_solc_version(&self.solc.version);
        if self.solc.optimizer.enabled {
            forge = forge.with_optimizer_runs(self.solc.optimizer.runs);
        }

        match self.auth {
            SenderAuth::PrivateKey(pk) => {
                forge = forge.with_private_key(*pk);
            }
            SenderAuth::Unlocked(addr) => {
                forge = forge.with_sender(format!("{:#x}", addr)).with_unlocked();
            }
        }

        // Run
        self.runner.run(self.shell, forge)?;

        // Read output
        let output_path = params.output(self.contracts_path);
        O::read(self.shell, output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_ADDR: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    #[test]
    fn explicit_key_broadcasts_from_its_own_address() {
        let pk = H256::from_str(DEV_PRIVATE_KEY).unwrap();
        let (auth, sender, mode) =
            resolve_execution(Some(pk), None, false, false, "http://localhost:8545").unwrap();

        assert!(matches!(auth, SenderAuth::PrivateKey(key) if key == pk));
        assert_eq!(format!("{sender:#x}"), DEV_ADDR);
        assert!(!mode.is_simulation());
    }

    #[test]
    fn mismatched_sender_is_rejected() {
        let pk = H256::from_str(DEV_PRIVATE_KEY).unwrap();
        let result = resolve_execution(
            Some(pk),
            Some(Address::zero()),
            false,
            false,
            "http://localhost:8545",
        );
        assert!(result.is_err());
    }

    #[test]
    fn dev_flag_uses_the_well_known_key() {
        let (_, sender, mode) =
            resolve_execution(None, None, true, false, "http://localhost:8545").unwrap();
        assert_eq!(format!("{sender:#x}"), DEV_ADDR);
        assert!(!mode.is_simulation());
    }

    #[test]
    fn broadcast_mode_keeps_the_original_rpc() {
        let mode = ExecutionMode::Broadcast;
        assert_eq!(mode.rpc_url("https://sepolia.infura.io/v3/key"), "https://sepolia.infura.io/v3/key");
    }
}
