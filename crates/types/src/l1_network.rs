use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Networks a deployment can target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum L1Network {
    Localhost,
    Sepolia,
}

impl L1Network {
    pub fn chain_id(&self) -> u64 {
        match self {
            L1Network::Localhost => 31337,
            L1Network::Sepolia => 11_155_111,
        }
    }

    /// RPC endpoint for this network. Sepolia goes through Infura, with the
    /// project key spliced into the path verbatim; the key is not validated
    /// here, so an empty key yields a malformed but deterministic URL.
    pub fn rpc_url(&self, infura_api_key: &str) -> String {
        match self {
            L1Network::Localhost => "http://localhost:8545".to_string(),
            L1Network::Sepolia => format!("https://sepolia.infura.io/v3/{infura_api_key}"),
        }
    }
}

impl fmt::Display for L1Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            L1Network::Localhost => write!(f, "localhost"),
            L1Network::Sepolia => write!(f, "sepolia"),
        }
    }
}
