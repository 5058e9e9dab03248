use std::collections::BTreeMap;
use std::env;

use pramb_cli_types::L1Network;
use serde::{Deserialize, Serialize};

use crate::consts::{INFURA_API_KEY_ENV, PRIVATE_KEY_ENV};

/// A named remote endpoint plus the accounts that sign through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub url: String,
    pub accounts: Vec<String>,
}

impl NetworkProfile {
    /// Sepolia profile from raw secret values. The project key is spliced
    /// into the endpoint verbatim and the private key gets the `0x` prefix
    /// the signer expects. Neither value is validated here; malformed
    /// secrets are rejected downstream by the deployment engine.
    pub fn sepolia(infura_api_key: &str, private_key: &str) -> Self {
        Self {
            url: L1Network::Sepolia.rpc_url(infura_api_key),
            accounts: vec![format!("0x{private_key}")],
        }
    }
}

/// Mapping from network name to its profile, as the framework consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl NetworkConfig {
    /// Resolve all network profiles from the process environment. Read once
    /// at startup; missing variables degrade to the empty string.
    pub fn from_env() -> Self {
        let api_key = env::var(INFURA_API_KEY_ENV).unwrap_or_default();
        let private_key = env::var(PRIVATE_KEY_ENV).unwrap_or_default();

        let mut networks = BTreeMap::new();
        networks.insert(
            L1Network::Sepolia.to_string(),
            NetworkProfile::sepolia(&api_key, &private_key),
        );
        Self { networks }
    }

    pub fn get(&self, name: &str) -> Option<&NetworkProfile> {
        self.networks.get(name)
    }

    /// Copy with account credentials masked, for terminal display.
    pub fn redacted(&self) -> Self {
        let networks = self
            .networks
            .iter()
            .map(|(name, profile)| {
                let profile = NetworkProfile {
                    url: profile.url.clone(),
                    accounts: profile.accounts.iter().map(|_| "<redacted>".to_string()).collect(),
                };
                (name.clone(), profile)
            })
            .collect();
        Self { networks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sepolia_url_follows_the_infura_template() {
        let profile = NetworkProfile::sepolia("my-project-id", "");
        assert_eq!(profile.url, "https://sepolia.infura.io/v3/my-project-id");
    }

    #[test]
    fn missing_api_key_degrades_to_a_deterministic_url() {
        let profile = NetworkProfile::sepolia("", "");
        assert_eq!(profile.url, "https://sepolia.infura.io/v3/");
    }

    #[test]
    fn signing_credential_is_the_prefixed_raw_key() {
        let raw = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let profile = NetworkProfile::sepolia("key", raw);
        assert_eq!(profile.accounts, vec![format!("0x{raw}")]);
    }

    #[test]
    fn redacted_config_keeps_urls_but_masks_accounts() {
        let mut networks = BTreeMap::new();
        networks.insert("sepolia".to_string(), NetworkProfile::sepolia("key", "secret"));
        let config = NetworkConfig { networks }.redacted();

        let profile = config.get("sepolia").unwrap();
        assert_eq!(profile.url, "https://sepolia.infura.io/v3/key");
        assert_eq!(profile.accounts, vec!["<redacted>".to_string()]);
    }
}
