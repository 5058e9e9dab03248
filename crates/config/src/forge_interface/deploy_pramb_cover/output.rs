use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::traits::FileConfigTrait;

/// Output written by the deploy script: the deployed contract handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployPrambCoverOutput {
    pub pramb_cover: Address,
}

impl FileConfigTrait for DeployPrambCoverOutput {}
