//! The secp256k1 scalar field, `GF(n)` where `n` is the curve order.
//!
//! Used for private keys and for the `I_L` value produced by CKDpriv, which
//! must be checked against `n` per BIP-32 before being added to the parent
//! key (see [`Scalar::is_valid_private_key`]).

use super::u256::{self, Limbs};

/// Curve order `n`.
const N: Limbs = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scalar(Limbs);

impl Scalar {
    pub(crate) fn from_bytes_be(bytes: &[u8; 32]) -> Scalar {
        Scalar(u256::from_bytes_be(bytes))
    }

    pub(crate) fn to_bytes_be(self) -> [u8; 32] {
        u256::to_bytes_be(&self.0)
    }

    pub(crate) fn is_zero(self) -> bool {
        u256::is_zero(&self.0)
    }

    /// `0 < k < n`, the BIP-32 validity condition for a derived private key.
    pub(crate) fn is_valid_private_key(self) -> bool {
        !self.is_zero() && u256::lt(&self.0, &N)
    }

    /// `(self + other) mod n`, used for `I_L + k_par mod n` in CKDpriv.
    ///
    /// Note this is *not* reduced through [`FieldElement`](super::field::FieldElement)'s
    /// modulus: the scalar field and base field share a bit width but not a
    /// modulus on secp256k1.
    pub(crate) fn add_mod_n(self, other: Scalar) -> Scalar {
        Scalar(u256::add_mod(&self.0, &other.0, &N))
    }

    /// Big-endian bits, most significant first, for double-and-add scalar
    /// multiplication.
    pub(crate) fn bits_be(self) -> impl Iterator<Item = bool> {
        let limbs = self.0;
        (0..256).rev().map(move |i| {
            let limb = limbs[i / 64];
            (limb >> (i % 64)) & 1 == 1
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_invalid() {
        let zero = Scalar::from_bytes_be(&[0u8; 32]);
        assert!(!zero.is_valid_private_key());
    }

    #[test]
    fn order_itself_is_invalid() {
        let scalar = Scalar(N);
        assert!(!scalar.is_valid_private_key());
    }

    #[test]
    fn one_is_valid() {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        let scalar = Scalar::from_bytes_be(&bytes);
        assert!(scalar.is_valid_private_key());
    }
}
