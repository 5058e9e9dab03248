/// Env var holding the deployer's hex private key, stored without the `0x` prefix.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
/// Env var holding the Infura project key used to build the Sepolia endpoint.
pub const INFURA_API_KEY_ENV: &str = "INFURA_API_KEY";
/// Env var overriding the contracts checkout root.
pub const CONTRACTS_ROOT_ENV: &str = "PRAMB_CONTRACTS_ROOT";

/// Default `_admin` constructor argument.
pub const DEFAULT_ADMIN_ADDR: &str = "0x2A7cB50213Be8F8Ce5E36F1c01963Dd7483eF848";
/// Default `_treasury` constructor argument.
pub const DEFAULT_TREASURY_ADDR: &str = "0x2A7cB50213Be8F8Ce5E36F1c01963Dd7483eF848";

/// Name of the descriptor file consumed by the build framework
pub const FOUNDRY_DESCRIPTOR_FILE: &str = "foundry.toml";
