use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ADMIN_ADDR, DEFAULT_TREASURY_ADDR};
use crate::traits::FileConfigTrait;

/// Named constructor parameters for `PrambCover`, each overridable at
/// deployment time.
#[derive(Debug, Clone, Default)]
pub struct DeployParams {
    pub admin: Option<Address>,
    pub treasury: Option<Address>,
}

/// Input config for the deploy script. Field order is constructor order:
/// `_admin` first, `_treasury` second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployPrambCoverInput {
    pub admin: Address,
    pub treasury: Address,
}

impl FileConfigTrait for DeployPrambCoverInput {}

impl DeployPrambCoverInput {
    /// Resolve each parameter to its override if supplied, otherwise to its
    /// literal default.
    pub fn new(params: &DeployParams) -> Self {
        Self {
            admin: params.admin.unwrap_or_else(default_admin),
            treasury: params.treasury.unwrap_or_else(default_treasury),
        }
    }

    /// Resolved constructor arguments, in declaration order.
    pub fn constructor_args(&self) -> [Address; 2] {
        [self.admin, self.treasury]
    }
}

fn default_admin() -> Address {
    DEFAULT_ADMIN_ADDR.parse().unwrap()
}

fn default_treasury() -> Address {
    DEFAULT_TREASURY_ADDR.parse().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_no_overrides_are_given() {
        let input = DeployPrambCoverInput::new(&DeployParams::default());
        let expected: Address = DEFAULT_ADMIN_ADDR.parse().unwrap();
        assert_eq!(input.constructor_args(), [expected, expected]);
    }

    #[test]
    fn overrides_are_passed_through_in_constructor_order() {
        let admin: Address = "0x0000000000000000000000000000000000000001".parse().unwrap();
        let treasury: Address = "0x0000000000000000000000000000000000000002".parse().unwrap();

        let input = DeployPrambCoverInput::new(&DeployParams {
            admin: Some(admin),
            treasury: Some(treasury),
        });
        assert_eq!(input.constructor_args(), [admin, treasury]);
    }

    #[test]
    fn partial_overrides_keep_the_other_default() {
        let treasury: Address = "0x0000000000000000000000000000000000000002".parse().unwrap();

        let input = DeployPrambCoverInput::new(&DeployParams {
            admin: None,
            treasury: Some(treasury),
        });
        assert_eq!(input.admin, DEFAULT_ADMIN_ADDR.parse().unwrap());
        assert_eq!(input.treasury, treasury);
    }
}
