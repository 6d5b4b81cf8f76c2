//! The 78-byte extended key blob: version ‖ depth ‖ parent fingerprint ‖
//! child number ‖ chain code ‖ key material, wrapped in Base58Check.

use alloc::string::String;
use zeroize::Zeroize;

use super::version::Version;
use crate::encoding::base58;
use crate::error::{Error, Result};

pub(crate) const BYTE_SIZE: usize = 78;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct ExtendedKey {
    pub(crate) version: Version,
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: [u8; 4],
    pub(crate) child_number: [u8; 4],
    pub(crate) chain_code: [u8; 32],
    /// 33 bytes: `0x00 ‖ private_key` for tprv, compressed pubkey for tpub.
    pub(crate) key_bytes: [u8; 33],
}

impl ExtendedKey {
    pub(crate) fn to_bytes(&self) -> [u8; BYTE_SIZE] {
        let mut out = [0u8; BYTE_SIZE];
        out[0..4].copy_from_slice(&self.version.to_bytes());
        out[4] = self.depth;
        out[5..9].copy_from_slice(&self.parent_fingerprint);
        out[9..13].copy_from_slice(&self.child_number);
        out[13..45].copy_from_slice(&self.chain_code);
        out[45..78].copy_from_slice(&self.key_bytes);
        out
    }

    pub(crate) fn to_base58check(&self) -> String {
        base58::encode_check(&self.to_bytes())
    }

    pub(crate) fn from_base58check(encoded: &str) -> Result<ExtendedKey> {
        let bytes = base58::decode_check(encoded)?;
        if bytes.len() != BYTE_SIZE {
            return Err(Error::InvalidExtendedKey);
        }
        let version = Version::from_bytes(bytes[0..4].try_into()?)?;
        let depth = bytes[4];
        let parent_fingerprint: [u8; 4] = bytes[5..9].try_into()?;
        let child_number: [u8; 4] = bytes[9..13].try_into()?;
        let chain_code: [u8; 32] = bytes[13..45].try_into()?;
        let key_bytes: [u8; 33] = bytes[45..78].try_into()?;
        Ok(ExtendedKey {
            version,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            key_bytes,
        })
    }
}

impl Zeroize for ExtendedKey {
    fn zeroize(&mut self) {
        self.depth.zeroize();
        self.parent_fingerprint.zeroize();
        self.child_number.zeroize();
        self.chain_code.zeroize();
        self.key_bytes.zeroize();
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_base58check() {
        let key = ExtendedKey {
            version: Version::TPrv,
            depth: 1,
            parent_fingerprint: [0xAA; 4],
            child_number: [0x80, 0, 0, 0],
            chain_code: [0x11; 32],
            key_bytes: {
                let mut b = [0u8; 33];
                b[1..].copy_from_slice(&[0x22; 32]);
                b
            },
        };
        let encoded = key.to_base58check();
        let decoded = ExtendedKey::from_base58check(&encoded).unwrap();
        assert_eq!(decoded, key);
    }

    #[test]
    fn rejects_wrong_length() {
        let encoded = crate::encoding::base58::encode_check(&[0u8; 50]);
        assert!(ExtendedKey::from_base58check(&encoded).is_err());
    }
}
