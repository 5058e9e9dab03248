use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, H256};

/// A sender identity: always an address, optionally the key that controls it.
#[derive(Debug, Clone)]
pub struct Wallet {
    pub address: Address,
    pub private_key: Option<LocalWallet>,
}

impl Wallet {
    /// Wallet from a raw 32-byte private key.
    pub fn from_h256(pk: H256) -> anyhow::Result<Self> {
        let signer = LocalWallet::from_bytes(pk.as_bytes())
            .map_err(|e| anyhow::anyhow!("Invalid private key: {}", e))?;
        Ok(Self {
            address: signer.address(),
            private_key: Some(signer),
        })
    }

    /// Address-only wallet (unlocked account on the node).
    pub fn unlocked(address: Address) -> Self {
        Self {
            address,
            private_key: None,
        }
    }

    pub fn private_key_h256(&self) -> Option<H256> {
        self.private_key
            .as_ref()
            .map(|k| H256::from_slice(k.signer().to_bytes().as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn dev_key_resolves_to_the_first_anvil_account() {
        let pk =
            H256::from_str("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
                .unwrap();
        let wallet = Wallet::from_h256(pk).unwrap();
        assert_eq!(
            format!("{:#x}", wallet.address),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(wallet.private_key_h256(), Some(pk));
    }

    #[test]
    fn unlocked_wallet_has_no_key_material() {
        let wallet = Wallet::unlocked(Address::zero());
        assert_eq!(wallet.private_key_h256(), None);
    }
}
