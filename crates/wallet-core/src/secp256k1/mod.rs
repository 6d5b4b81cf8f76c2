//! A from-scratch secp256k1 implementation: field/scalar arithmetic and
//! affine point operations, with no dependency on an external elliptic-curve
//! crate. Only the operations the wallet core actually needs are exposed:
//! public-key derivation and the scalar addition CKDpriv performs on `I_L`.

mod field;
mod point;
mod scalar;
mod u256;

use crate::error::Result;
use point::Point;
use scalar::Scalar;

/// Derives the SEC1-compressed public key for a 32-byte big-endian private
/// key scalar.
pub(crate) fn public_key_from_private(private_key: &[u8; 32]) -> Result<[u8; 33]> {
    let scalar = Scalar::from_bytes_be(private_key);
    Point::generator().scalar_mul(scalar).to_compressed()
}

/// `0 < key < n`, the validity condition for a secp256k1 private key.
pub(crate) fn is_valid_private_key(bytes: &[u8; 32]) -> bool {
    Scalar::from_bytes_be(bytes).is_valid_private_key()
}

/// `(a + b) mod n`, the final step of CKDpriv (`I_L + k_par mod n`).
pub(crate) fn add_scalars_mod_n(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    Scalar::from_bytes_be(a)
        .add_mod_n(Scalar::from_bytes_be(b))
        .to_bytes_be()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn private_key_one_derives_known_generator_pubkey() {
        let mut key = [0u8; 32];
        key[31] = 1;
        let pubkey = public_key_from_private(&key).unwrap();
        assert_eq!(pubkey[0], 0x02);
        assert_eq!(
            pubkey[1..],
            hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
        );
    }
}
