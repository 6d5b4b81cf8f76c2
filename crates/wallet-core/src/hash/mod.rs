//! Hashing primitives. SHA-256, HMAC-SHA-512 and PBKDF2 come from the
//! RustCrypto crates (`sha2`, `hmac`, `pbkdf2`) per the core's policy of
//! using a known-good implementation where one is available; RIPEMD-160 is
//! vendored as pure code since it isn't always present in a platform's hash
//! list.

mod hash160;
mod ripemd160;

use hmac::{Hmac, Mac};
use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

pub(crate) use hash160::hash160;

pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

pub(crate) fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// HMAC-SHA-512, returning the full 64-byte MAC.
pub(crate) fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut mac = Hmac::<Sha512>::new_from_slice(key).map_err(|_| Error::Crypto)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// PBKDF2-HMAC-SHA-512 with a 64-byte output, as BIP-39 requires.
pub(crate) fn pbkdf2_hmac_sha512(password: &[u8], salt: &[u8], iterations: u32) -> [u8; 64] {
    let mut out = [0u8; 64];
    pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_sha256_of_empty_matches_known_vector() {
        let digest = double_sha256(b"");
        let expected: [u8; 32] = [
            0x5d, 0xf6, 0xe0, 0xe2, 0x76, 0x13, 0x59, 0xd3, 0x0a, 0x82, 0x75, 0x05, 0x8e, 0x29,
            0x9f, 0xcc, 0x03, 0x81, 0x53, 0x45, 0x45, 0xf5, 0x5c, 0xf4, 0x3e, 0x41, 0x98, 0x3f,
            0x5d, 0x4c, 0x94, 0x56,
        ];
        assert_eq!(digest, expected);
    }
}
