//! Wallet Import Format: `version ‖ key32 ‖ 0x01` (compressed), Base58Check.

use alloc::string::String;
use alloc::vec::Vec;

use crate::encoding::base58;

/// Testnet WIF version byte.
pub(crate) const TESTNET: u8 = 0xEF;
/// Mainnet WIF version byte, kept for completeness though the wallet core
/// only ever emits testnet addresses.
#[allow(dead_code)]
pub(crate) const MAINNET: u8 = 0x80;

pub(crate) fn encode(private_key: &[u8; 32], version: u8) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(version);
    payload.extend_from_slice(private_key);
    payload.push(0x01);
    base58::encode_check(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testnet_wif_starts_with_c() {
        let key = [0x11u8; 32];
        let wif = encode(&key, TESTNET);
        assert!(wif.starts_with('c'), "testnet compressed WIF should start with 'c', got {wif}");
    }
}
