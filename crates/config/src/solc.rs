use serde::{Deserialize, Serialize};

/// Compiler version every deployment builds with.
pub const SOLC_VERSION: &str = "0.8.24";
/// Optimizer runs the contracts are tuned for.
pub const OPTIMIZER_RUNS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcConfig {
    pub version: String,
    pub optimizer: OptimizerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub enabled: bool,
    pub runs: u32,
}

impl SolcConfig {
    /// The pinned compiler profile. Not operator-tunable; every invocation
    /// compiles with the same settings.
    pub fn pinned() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            optimizer: OptimizerConfig {
                enabled: true,
                runs: OPTIMIZER_RUNS,
            },
        }
    }
}
