//! Base58 and Base58Check, ported from the standard divmod-by-58 algorithm
//! (the same one used by Bitcoin Core's `base58.cpp`). Leading zero bytes
//! become leading `'1'` characters and vice versa; this is the
//! correctness-critical edge case callers rely on.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::hash::double_sha256;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn char_value(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u8)
}

pub(crate) fn encode(input: &[u8]) -> String {
    let zeroes = input.iter().take_while(|&&b| b == 0).count();
    let body = &input[zeroes..];

    // log(256)/log(58), rounded up, plus one for safety.
    let size = body.len() * 138 / 100 + 1;
    let mut digits = vec![0u8; size];
    let mut length = 0usize;

    for &byte in body {
        let mut carry = byte as u32;
        let mut i = 0usize;
        for d in digits.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 256 * (*d as u32);
            *d = (carry % 58) as u8;
            carry /= 58;
            i += 1;
        }
        length = i;
    }

    let mut out = String::with_capacity(zeroes + digits.len());
    out.extend(core::iter::repeat('1').take(zeroes));
    for &d in digits.iter().skip_while(|&&d| d == 0) {
        out.push(ALPHABET[d as usize] as char);
    }
    out
}

pub(crate) fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    let zeroes = bytes.iter().take_while(|&&b| b == b'1').count();
    let body = &bytes[zeroes..];

    // log(58)/log(256), rounded up.
    let size = body.len() * 733 / 1000 + 1;
    let mut out = vec![0u8; size];
    let mut length = 0usize;

    for &c in body {
        let value = char_value(c).ok_or(Error::Base58)?;
        let mut carry = value as u32;
        let mut i = 0usize;
        for b in out.iter_mut().rev() {
            if carry == 0 && i >= length {
                break;
            }
            carry += 58 * (*b as u32);
            *b = (carry % 256) as u8;
            carry /= 256;
            i += 1;
        }
        length = i;
    }

    let mut result = Vec::with_capacity(zeroes + out.len());
    result.extend(core::iter::repeat(0u8).take(zeroes));
    result.extend(out.into_iter().skip_while(|&b| b == 0));
    Ok(result)
}

/// Encodes `payload ‖ doubleSHA256(payload)[..4]`.
pub(crate) fn encode_check(payload: &[u8]) -> String {
    let checksum = double_sha256(payload);
    let mut buf = Vec::with_capacity(payload.len() + 4);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum[..4]);
    encode(&buf)
}

/// Decodes and verifies the trailing 4-byte checksum, returning the payload
/// with the checksum stripped.
pub(crate) fn decode_check(input: &str) -> Result<Vec<u8>> {
    let decoded = decode(input)?;
    if decoded.len() < 4 {
        return Err(Error::Base58);
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - 4);
    let expected = double_sha256(payload);
    if &expected[..4] != checksum {
        return Err(Error::Base58);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_bytes_roundtrip() {
        let input = [0x00, 0xAB, 0xCD];
        let encoded = encode(&input);
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn all_zero_bytes_roundtrip() {
        let input = [0x00, 0x00];
        let encoded = encode(&input);
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn spec_edge_case_0001() {
        assert_eq!(encode(&[0x00, 0x01]), "12");
        assert_eq!(decode("12").unwrap(), alloc::vec![0x00, 0x01]);
    }

    #[test]
    fn empty_input_roundtrips_to_empty_string() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_invalid_character() {
        assert_eq!(decode("0OIl"), Err(Error::Base58));
    }

    #[test]
    fn check_roundtrip() {
        let payload = [1u8; 32];
        let encoded = encode_check(&payload);
        assert_eq!(decode_check(&encoded).unwrap(), payload);
    }

    #[test]
    fn check_rejects_corrupted_checksum() {
        let payload = [2u8; 32];
        let mut encoded = encode_check(&payload);
        encoded.push('1');
        assert!(decode_check(&encoded).is_err());
    }
}
