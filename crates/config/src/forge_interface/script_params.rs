use std::path::{Path, PathBuf};

/// Binds a forge deploy script to the input/output file locations it reads
/// and writes under the contracts checkout.
#[derive(Debug, Clone)]
pub struct ForgeScriptParams {
    input: &'static str,
    output: &'static str,
    script_path: &'static str,
}

impl ForgeScriptParams {
    pub fn input(&self, base: &Path) -> PathBuf {
        base.join(self.input)
    }

    pub fn output(&self, base: &Path) -> PathBuf {
        base.join(self.output)
    }

    pub fn script(&self) -> String {
        self.script_path.to_string()
    }
}

pub const DEPLOY_PRAMB_COVER_SCRIPT_PARAMS: ForgeScriptParams = ForgeScriptParams {
    input: "script-config/deploy-pramb-cover.json",
    output: "script-out/output-deploy-pramb-cover.json",
    script_path: "script/DeployPrambCover.s.sol",
};
