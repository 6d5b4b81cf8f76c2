//! P2WPKH (witness v0) address assembly: `HASH160(pubkey)` wrapped in
//! Bech32 under a configured human-readable prefix.

use alloc::string::String;

use crate::encoding::bech32;
use crate::error::Result;
use crate::hash::hash160;

pub(crate) fn p2wpkh_address(compressed_pubkey: &[u8; 33], hrp: &str) -> Result<String> {
    let program = hash160(compressed_pubkey);
    bech32::encode_p2wpkh_address(hrp, &program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_has_expected_shape() {
        let mut pubkey = [0u8; 33];
        pubkey[0] = 0x02;
        pubkey[1] = 1;
        let address = p2wpkh_address(&pubkey, "crnrt").unwrap();
        assert!(address.starts_with("crnrt1q"));
        assert!(address.len() >= 42 && address.len() <= 62);
    }
}
