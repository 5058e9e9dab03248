use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{NetworkConfig, SolcConfig};

/// The structured object handed to the build framework: compiler settings
/// plus named RPC endpoints, in `foundry.toml` shape. Signing credentials
/// never land in the descriptor file; they travel as process flags on the
/// forge invocation instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundryDescriptor {
    pub profile: ProfileSection,
    pub rpc_endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSection {
    pub default: DefaultProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultProfile {
    pub solc_version: String,
    pub optimizer: bool,
    pub optimizer_runs: u32,
}

impl FoundryDescriptor {
    pub fn new(solc: &SolcConfig, networks: &NetworkConfig) -> Self {
        Self {
            profile: ProfileSection {
                default: DefaultProfile {
                    solc_version: solc.version.clone(),
                    optimizer: solc.optimizer.enabled,
                    optimizer_runs: solc.optimizer.runs,
                },
            },
            rpc_endpoints: networks
                .networks
                .iter()
                .map(|(name, profile)| (name.clone(), profile.url.clone()))
                .collect(),
        }
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::NetworkProfile;

    #[test]
    fn descriptor_renders_the_foundry_toml_shape() {
        let mut networks = BTreeMap::new();
        networks.insert("sepolia".to_string(), NetworkProfile::sepolia("key", "secret"));
        let networks = NetworkConfig { networks };

        let rendered = FoundryDescriptor::new(&SolcConfig::pinned(), &networks)
            .to_toml()
            .unwrap();

        assert!(rendered.contains("[profile.default]"));
        assert!(rendered.contains("solc_version = \"0.8.24\""));
        assert!(rendered.contains("optimizer_runs = 1000"));
        assert!(rendered.contains("sepolia = \"https://sepolia.infura.io/v3/key\""));
    }

    #[test]
    fn descriptor_never_carries_account_credentials() {
        let mut networks = BTreeMap::new();
        networks.insert("sepolia".to_string(), NetworkProfile::sepolia("key", "secret"));
        let networks = NetworkConfig { networks };

        let rendered = FoundryDescriptor::new(&SolcConfig::pinned(), &networks)
            .to_toml()
            .unwrap();
        assert!(!rendered.contains("secret"));
    }
}
