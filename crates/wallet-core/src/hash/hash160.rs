//! `HASH160(x) = RIPEMD160(SHA256(x))`.

use sha2::{Digest, Sha256};

use super::ripemd160::ripemd160;

pub(crate) fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    ripemd160(&sha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_vector() {
        // HASH160("") — RIPEMD160(SHA256("")).
        let digest = hash160(b"");
        assert_eq!(
            digest,
            [
                0xb4, 0x72, 0xa2, 0x66, 0xd0, 0xbd, 0x89, 0xc1, 0x37, 0x06, 0xa4, 0x13, 0x2c, 0x52,
                0xb7, 0x35, 0x0d, 0x78, 0x37, 0x47,
            ]
        );
    }
}
