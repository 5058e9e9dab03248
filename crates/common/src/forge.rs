use std::path::{Path, PathBuf};

use clap::Parser;
use ethers::types::H256;
use serde::{Deserialize, Serialize};
use xshell::{cmd, Shell};

use crate::cmd::Cmd;

/// Entry point for building forge invocations rooted at a contracts checkout.
#[derive(Debug)]
pub struct Forge {
    path: PathBuf,
}

impl Forge {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Start building a `forge script` invocation for the given script.
    pub fn script(&self, path: &str, args: ForgeScriptArgs) -> ForgeScript {
        ForgeScript {
            base_path: self.path.clone(),
            script_path: PathBuf::from(path),
            args,
            flags: Vec::new(),
            wallet_args: false,
        }
    }
}

/// A single `forge script` invocation under construction.
#[derive(Debug)]
pub struct ForgeScript {
    base_path: PathBuf,
    script_path: PathBuf,
    args: ForgeScriptArgs,
    flags: Vec<String>,
    wallet_args: bool,
}

impl ForgeScript {
    pub fn with_ffi(mut self) -> Self {
        self.flags.push("--ffi".to_string());
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: String) -> Self {
        self.flags.push("--rpc-url".to_string());
        self.flags.push(rpc_url);
        self
    }

    pub fn with_broadcast(mut self) -> Self {
        self.flags.push("--broadcast".to_string());
        self
    }

    pub fn with_slow(mut self) -> Self {
        self.flags.push("--slow".to_string());
        self
    }

    pub fn with_solc_version(mut self, version: &str) -> Self {
        self.flags.push("--use".to_string());
        self.flags.push(version.to_string());
        self
    }

    pub fn with_optimizer_runs(mut self, runs: u32) -> Self {
        self.flags.push("--optimize".to_string());
        self.flags.push("--optimizer-runs".to_string());
        self.flags.push(runs.to_string());
        self
    }

    pub fn with_private_key(mut self, private_key: H256) -> Self {
        self.flags.push("--private-key".to_string());
        self.flags.push(format!("{private_key:#x}"));
        self.wallet_args = true;
        self
    }

    pub fn with_sender(mut self, sender: String) -> Self {
        self.flags.push("--sender".to_string());
        self.flags.push(sender);
        self.wallet_args = true;
        self
    }

    pub fn with_unlocked(mut self) -> Self {
        self.flags.push("--unlocked".to_string());
        self
    }

    /// Whether a signing flag has already been attached.
    pub fn wallet_args_passed(&self) -> bool {
        self.wallet_args
    }

    pub fn script_path(&self) -> &Path {
        &self.script_path
    }

    /// Flags plus passthrough args, with key material masked. Safe to log
    /// or persist in run records.
    pub fn redacted_args(&self) -> Vec<String> {
        let mut redact_next = false;
        let mut args: Vec<String> = Vec::new();
        for arg in self.flags.iter().chain(self.args.forge_args.iter()) {
            if redact_next {
                args.push("<redacted>".to_string());
                redact_next = false;
                continue;
            }
            if arg == "--private-key" {
                redact_next = true;
            }
            args.push(arg.clone());
        }
        args
    }

    /// Run the script through the given shell, from the checkout root.
    pub fn run(self, shell: &Shell) -> anyhow::Result<()> {
        let _dir_guard = shell.push_dir(&self.base_path);
        let script_path = self.script_path;
        let flags = self.flags;
        let extra = self.args.forge_args;
        Cmd::new(cmd!(shell, "forge script {script_path} {flags...} {extra...}")).run()
    }
}

/// Executes forge scripts and keeps a record of what ran.
#[derive(Debug, Default)]
pub struct ForgeRunner {
    runs: Vec<ForgeRun>,
}

/// Record of a single executed script.
#[derive(Debug, Clone, Serialize)]
pub struct ForgeRun {
    pub script: String,
    pub args: Vec<String>,
}

impl ForgeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, shell: &Shell, script: ForgeScript) -> anyhow::Result<()> {
        self.runs.push(ForgeRun {
            script: script.script_path().display().to_string(),
            args: script.redacted_args(),
        });
        script.run(shell)
    }

    pub fn runs(&self) -> &[ForgeRun] {
        &self.runs
    }
}

/// Forge-related CLI args, flattened into every deploying command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
pub struct ForgeArgs {
    #[clap(flatten)]
    #[serde(flatten)]
    pub runner: ForgeRunnerArgs,
    #[clap(flatten)]
    #[serde(flatten)]
    pub script: ForgeScriptArgs,
}

/// Options for the runner itself rather than the forge process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
pub struct ForgeRunnerArgs {
    /// Write the deployment report here instead of stdout.
    #[clap(long, help_heading = "Forge options")]
    pub out: Option<PathBuf>,
}

/// Arguments passed through to every `forge script` invocation verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
pub struct ForgeScriptArgs {
    #[clap(
        long = "forge-arg",
        help = "Extra argument passed through to forge verbatim (repeatable)",
        help_heading = "Forge options"
    )]
    #[serde(default)]
    pub forge_args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_expected_flags() {
        let forge = Forge::new(Path::new("/tmp/contracts"));
        let script = forge
            .script("script/DeployPrambCover.s.sol", ForgeScriptArgs::default())
            .with_rpc_url("http://localhost:8545".to_string())
            .with_broadcast()
            .with_slow()
            .with_solc_version("0.8.24")
            .with_optimizer_runs(1000);

        let args = script.redacted_args();
        assert!(args.contains(&"--broadcast".to_string()));
        assert!(args.windows(2).any(|w| w == ["--use", "0.8.24"]));
        assert!(args.windows(2).any(|w| w == ["--optimizer-runs", "1000"]));
    }

    #[test]
    fn private_key_never_appears_in_run_records() {
        let pk = H256::from_low_u64_be(7);
        let script = Forge::new(Path::new("."))
            .script("script/DeployPrambCover.s.sol", ForgeScriptArgs::default())
            .with_private_key(pk);

        assert!(script.wallet_args_passed());
        let args = script.redacted_args();
        assert!(args.contains(&"--private-key".to_string()));
        assert!(args.contains(&"<redacted>".to_string()));
        assert!(!args.iter().any(|a| a.contains("0000000000000007")));
    }

    #[test]
    fn passthrough_args_follow_builder_flags() {
        let forge_args = ForgeScriptArgs {
            forge_args: vec!["--gas-estimate-multiplier".to_string(), "130".to_string()],
        };
        let script = Forge::new(Path::new("."))
            .script("script/DeployPrambCover.s.sol", forge_args)
            .with_broadcast();

        let args = script.redacted_args();
        assert_eq!(
            args,
            vec!["--broadcast", "--gas-estimate-multiplier", "130"]
        );
    }
}
