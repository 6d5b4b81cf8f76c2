//! The secp256k1 base field, `GF(p)` with `p = 2^256 - 2^32 - 977`.

use super::u256::{self, Limbs};

/// `p = 2^256 - 2^32 - 977`.
const P: Limbs = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// `p - 2`, the Fermat inversion exponent.
const P_MINUS_2: Limbs = [
    0xFFFF_FFFE_FFFF_FC2D,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// An element of the secp256k1 base field, always held in `[0, p)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct FieldElement(Limbs);

impl FieldElement {
    pub(crate) const ZERO: FieldElement = FieldElement([0, 0, 0, 0]);

    /// secp256k1's `b` curve coefficient (`a = 0`).
    pub(crate) fn curve_b() -> FieldElement {
        FieldElement([7, 0, 0, 0])
    }

    /// Builds a field element from big-endian bytes, reducing if `>= p`.
    pub(crate) fn from_bytes_be(bytes: &[u8; 32]) -> FieldElement {
        let limbs = u256::from_bytes_be(bytes);
        if u256::lt(&limbs, &P) {
            FieldElement(limbs)
        } else {
            FieldElement(u256::sub_mod(&limbs, &P, &P))
        }
    }

    pub(crate) fn to_bytes_be(self) -> [u8; 32] {
        u256::to_bytes_be(&self.0)
    }

    pub(crate) fn is_zero(self) -> bool {
        u256::is_zero(&self.0)
    }

    pub(crate) fn is_even(self) -> bool {
        self.0[0] & 1 == 0
    }

    pub(crate) fn add(self, other: FieldElement) -> FieldElement {
        FieldElement(u256::add_mod(&self.0, &other.0, &P))
    }

    pub(crate) fn sub(self, other: FieldElement) -> FieldElement {
        FieldElement(u256::sub_mod(&self.0, &other.0, &P))
    }

    pub(crate) fn mul(self, other: FieldElement) -> FieldElement {
        FieldElement(u256::mul_mod(&self.0, &other.0, &P))
    }

    pub(crate) fn square(self) -> FieldElement {
        self.mul(self)
    }

    pub(crate) fn neg(self) -> FieldElement {
        FieldElement::ZERO.sub(self)
    }

    /// Multiplicative inverse via Fermat's little theorem (`a^(p-2) mod p`).
    ///
    /// Returns `ZERO` for `ZERO`, mirroring the convention used by the curve
    /// arithmetic above (an inverse of zero is never actually dereferenced on
    /// any code path that matters: it would imply adding the identity to
    /// itself, which is handled before this is called).
    pub(crate) fn invert(self) -> FieldElement {
        if self.is_zero() {
            return FieldElement::ZERO;
        }
        FieldElement(u256::pow_mod(&self.0, &P_MINUS_2, &P))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_roundtrips() {
        let a = FieldElement::from_bytes_be(&[9u8; 32]);
        let inv = a.invert();
        let one = a.mul(inv);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(one.to_bytes_be(), expected);
    }

    #[test]
    fn reduces_values_above_p() {
        let bytes = [0xFFu8; 32];
        let element = FieldElement::from_bytes_be(&bytes);
        assert!(u256::lt(&element.0, &P));
    }
}
