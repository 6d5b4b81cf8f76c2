//! Master-key derivation from seed and CKDpriv child derivation.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use super::child_number::ChildNumber;
use super::extended_key::ExtendedKey;
use super::version::Version;
use crate::error::{Error, Result};
use crate::hash::{hash160, hmac_sha512};
use crate::secp256k1;

const BIP32_SEED_KEY: &[u8] = b"Bitcoin seed";

#[derive(Clone)]
pub(crate) struct ExtendedPrivateKey {
    pub(crate) private_key: [u8; 32],
    pub(crate) chain_code: [u8; 32],
    pub(crate) depth: u8,
    pub(crate) parent_fingerprint: [u8; 4],
    pub(crate) child_number: [u8; 4],
}

impl core::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("private_key", &"...")
            .field("chain_code", &"...")
            .field("depth", &self.depth)
            .finish()
    }
}

impl ConstantTimeEq for ExtendedPrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.private_key.ct_eq(&other.private_key)
            & self.chain_code.ct_eq(&other.chain_code)
            & self.depth.ct_eq(&other.depth)
    }
}

/// NOTE: uses [`ConstantTimeEq`] internally.
impl Eq for ExtendedPrivateKey {}

/// NOTE: uses [`ConstantTimeEq`] internally.
impl PartialEq for ExtendedPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Zeroize for ExtendedPrivateKey {
    fn zeroize(&mut self) {
        self.private_key.zeroize();
        self.chain_code.zeroize();
        self.depth.zeroize();
        self.parent_fingerprint.zeroize();
        self.child_number.zeroize();
    }
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ExtendedPrivateKey {
    /// `I = HMAC-SHA512("Bitcoin seed", S)`; rejects a master key that's
    /// zero or `>= N` (cryptographically negligible, but checked).
    pub(crate) fn from_seed(seed: &[u8]) -> Result<ExtendedPrivateKey> {
        let i = hmac_sha512(BIP32_SEED_KEY, seed)?;
        let private_key: [u8; 32] = i[0..32].try_into()?;
        let chain_code: [u8; 32] = i[32..64].try_into()?;
        if !secp256k1::is_valid_private_key(&private_key) {
            return Err(Error::DerivationFailure);
        }
        Ok(ExtendedPrivateKey {
            private_key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_number: [0u8; 4],
        })
    }

    pub(crate) fn public_key(&self) -> Result<[u8; 33]> {
        secp256k1::public_key_from_private(&self.private_key)
    }

    /// First 4 bytes of `HASH160(compressed_pubkey)`, used as this key's
    /// children's parent fingerprint.
    pub(crate) fn fingerprint(&self) -> Result<[u8; 4]> {
        let pubkey = self.public_key()?;
        let digest = hash160(&pubkey);
        Ok([digest[0], digest[1], digest[2], digest[3]])
    }

    /// CKDpriv: derives the child at `index`.
    pub(crate) fn derive_child(&self, index: ChildNumber) -> Result<ExtendedPrivateKey> {
        if self.depth == u8::MAX {
            return Err(Error::Depth);
        }

        let mut data = alloc::vec::Vec::with_capacity(37);
        if index.is_hardened() {
            data.push(0u8);
            data.extend_from_slice(&self.private_key);
        } else {
            data.extend_from_slice(&self.public_key()?);
        }
        data.extend_from_slice(&index.to_bytes());

        let i = hmac_sha512(&self.chain_code, &data)?;
        let i_l: [u8; 32] = i[0..32].try_into()?;
        let i_r: [u8; 32] = i[32..64].try_into()?;

        if !secp256k1::is_valid_private_key(&i_l) {
            return Err(Error::DerivationFailure);
        }
        let child_key = secp256k1::add_scalars_mod_n(&i_l, &self.private_key);
        if !secp256k1::is_valid_private_key(&child_key) {
            return Err(Error::DerivationFailure);
        }

        Ok(ExtendedPrivateKey {
            private_key: child_key,
            chain_code: i_r,
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint()?,
            child_number: index.to_bytes(),
        })
    }

    pub(crate) fn to_extended_key(&self) -> ExtendedKey {
        let mut key_bytes = [0u8; 33];
        key_bytes[1..].copy_from_slice(&self.private_key);
        ExtendedKey {
            version: Version::TPrv,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
            chain_code: self.chain_code,
            key_bytes,
        }
    }

    pub(crate) fn to_public_extended_key(&self) -> Result<ExtendedKey> {
        Ok(ExtendedKey {
            version: Version::TPub,
            depth: self.depth,
            parent_fingerprint: self.parent_fingerprint,
            child_number: self.child_number,
            chain_code: self.chain_code,
            key_bytes: self.public_key()?,
        })
    }

    /// Reconstructs a non-root extended private key from a parsed `tprv`
    /// extended key blob, used by path re-derivation where depth/fingerprint
    /// bookkeeping from the caller's blob is preserved verbatim.
    pub(crate) fn from_extended_key(extended: &ExtendedKey) -> Result<ExtendedPrivateKey> {
        if !extended.version.is_private() {
            return Err(Error::InvalidExtendedKey);
        }
        if extended.key_bytes[0] != 0 {
            return Err(Error::InvalidExtendedKey);
        }
        let private_key: [u8; 32] = extended.key_bytes[1..].try_into()?;
        Ok(ExtendedPrivateKey {
            private_key,
            chain_code: extended.chain_code,
            depth: extended.depth,
            parent_fingerprint: extended.parent_fingerprint,
            child_number: extended.child_number,
        })
    }
}
