//! Path re-derivation: given a caller-supplied master `tprv` and a
//! derivation path, walk CKDpriv and return the leaf WIF. No extended-key
//! serialization happens along the way.

use alloc::string::String;

use crate::bip32::{DerivationPath, ExtendedKey, ExtendedPrivateKey};
use crate::error::Result;
use crate::wif;

pub fn derive_wif_from_xprv(master_xprv: &str, path: &str) -> Result<String> {
    let extended = ExtendedKey::from_base58check(master_xprv)?;
    let mut current = ExtendedPrivateKey::from_extended_key(&extended)?;

    let derivation_path: DerivationPath = path.parse()?;
    for index in &derivation_path.indices {
        current = current.derive_child(*index)?;
    }

    Ok(wif::encode(&current.private_key, wif::TESTNET))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::wallet::generate_with_entropy;

    #[test]
    fn rederivation_matches_orchestrator_leaf() {
        let entropy = [0u8; 16];
        let wallet =
            generate_with_entropy(&entropy, "", "m/84h/1h/0h/0/0", "crnrt").unwrap();
        let wif = derive_wif_from_xprv(&wallet.master_xprv, "m/84h/1h/0h/0/0").unwrap();
        assert_eq!(wif, wallet.private_key_wif);
    }

    #[test]
    fn rejects_malformed_path() {
        let entropy = [0u8; 16];
        let wallet = generate_with_entropy(&entropy, "", "m/0h", "crnrt").unwrap();
        let err = derive_wif_from_xprv(&wallet.master_xprv, "m/84h/1x/0h").unwrap_err();
        assert_eq!(err, Error::InvalidPath);
    }

    #[test]
    fn rejects_wrong_version() {
        // A tpub (not tprv) extended key must be rejected outright.
        let entropy = [0u8; 16];
        let wallet = generate_with_entropy(&entropy, "", "m/0h", "crnrt").unwrap();
        let err = derive_wif_from_xprv(&wallet.master_xpub, "m/0").unwrap_err();
        assert_eq!(err, Error::InvalidExtendedKey);
    }
}
