//! Bech32 (BIP-173): polymod checksum, HRP expansion, 8-to-5 bit regrouping,
//! and P2WPKH witness address assembly.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{Error, Result};

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";
const GENERATOR: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = (chk & 0x01ff_ffff) << 5 ^ (v as u32);
        for i in 0..5 {
            if (top >> i) & 1 == 1 {
                chk ^= GENERATOR[i];
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(hrp.len() * 2 + 1);
    out.extend(hrp.bytes().map(|c| c >> 5));
    out.push(0);
    out.extend(hrp.bytes().map(|c| c & 31));
    out
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    let polymod_value = polymod(&values) ^ 1;
    let mut checksum = [0u8; 6];
    for (i, slot) in checksum.iter_mut().enumerate() {
        *slot = ((polymod_value >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == 1
}

pub(crate) fn encode(hrp: &str, data: &[u8]) -> String {
    let checksum = create_checksum(hrp, data);
    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + checksum.len());
    out.push_str(hrp);
    out.push('1');
    for &d in data.iter().chain(checksum.iter()) {
        out.push(CHARSET[d as usize] as char);
    }
    out
}

/// Splits `bech1qw...` into `(hrp, 5-bit data words including checksum)` and
/// verifies the checksum.
pub(crate) fn decode(input: &str) -> Result<(String, Vec<u8>)> {
    let lowered_has_upper = input.chars().any(|c| c.is_ascii_uppercase());
    let lowered_has_lower = input.chars().any(|c| c.is_ascii_lowercase());
    if lowered_has_upper && lowered_has_lower {
        return Err(Error::Bech32);
    }
    let input = input.to_ascii_lowercase();
    let sep = input.rfind('1').ok_or(Error::Bech32)?;
    if sep == 0 || sep + 7 > input.len() {
        return Err(Error::Bech32);
    }
    let hrp = &input[..sep];
    let data_part = &input[sep + 1..];

    let mut data = Vec::with_capacity(data_part.len());
    for c in data_part.bytes() {
        let value = CHARSET.iter().position(|&x| x == c).ok_or(Error::Bech32)?;
        data.push(value as u8);
    }

    if !verify_checksum(hrp, &data) {
        return Err(Error::Bech32);
    }
    let payload_len = data.len() - 6;
    Ok((String::from(hrp), data[..payload_len].to_vec()))
}

/// Regroups bits between arbitrary group sizes (8<->5 for Bech32). With
/// `pad` set, trailing zero bits are appended to fill the final group; bits
/// left over without padding must be zero or the input is rejected.
pub(crate) fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let max_value = (1u32 << to_bits) - 1;
    let mut out = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        if (value as u32) >> from_bits != 0 {
            return Err(Error::Bech32);
        }
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            out.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            out.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(Error::Bech32);
    }

    Ok(out)
}

/// Assembles a witness-version-0 P2WPKH address from a 20-byte HASH160
/// program under the given human-readable prefix.
pub(crate) fn encode_p2wpkh_address(hrp: &str, program: &[u8; 20]) -> Result<String> {
    let mut data = Vec::with_capacity(33);
    data.push(0u8);
    data.extend(convert_bits(program, 8, 5, true)?);
    Ok(encode(hrp, &data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bip173_vector_decodes_to_known_program() {
        let address = "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4";
        let (hrp, data) = decode(address).unwrap();
        assert_eq!(hrp, "bc");
        // First 5-bit word is the witness version; the rest is the program.
        assert_eq!(data[0], 0);
        let program = convert_bits(&data[1..], 5, 8, false).unwrap();
        assert_eq!(
            program,
            alloc::vec![
                0x75, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4, 0x54, 0x94, 0x1c, 0x45, 0xd1, 0xb3,
                0xa3, 0x23, 0xf1, 0x43, 0x3b, 0xd6,
            ]
        );
    }

    #[test]
    fn address_roundtrips_through_encode() {
        let program = [0x75u8, 0x1e, 0x76, 0xe8, 0x19, 0x91, 0x96, 0xd4, 0x54, 0x94, 0x1c, 0x45,
            0xd1, 0xb3, 0xa3, 0x23, 0xf1, 0x43, 0x3b, 0xd6];
        let address = encode_p2wpkh_address("bc", &program).unwrap();
        let (hrp, data) = decode(&address).unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(data[0], 0);
        assert_eq!(convert_bits(&data[1..], 5, 8, false).unwrap(), program);
    }

    #[test]
    fn mixed_case_is_rejected() {
        assert!(decode("bC1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4").is_err());
    }
}
