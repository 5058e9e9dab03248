use std::path::{Path, PathBuf};

use pramb_cli_config::CONTRACTS_ROOT_ENV;

/// Returns the root of the PrambCover contracts checkout.
pub fn contracts_root() -> PathBuf {
    if let Ok(path) = std::env::var(CONTRACTS_ROOT_ENV) {
        PathBuf::from(path)
    } else {
        default_contracts_root()
    }
}

/// Resolves a path relative to the contracts checkout root.
pub fn path_from_root<P: AsRef<Path>>(relative: P) -> PathBuf {
    contracts_root().join(relative)
}

fn default_contracts_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // .../crates/cli -> two levels up to the repository root
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to resolve default contracts root")
        .join("contracts")
}
