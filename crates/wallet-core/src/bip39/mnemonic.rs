//! BIP-39: entropy to mnemonic, and mnemonic to seed.

use alloc::string::String;
use alloc::vec::Vec;

use super::wordlist::WORDLIST;
use crate::error::{Error, Result};
use crate::hash::{pbkdf2_hmac_sha512, sha256};

const PBKDF2_ROUNDS: u32 = 2048;
const SEED_SIZE: usize = 64;

/// Entropy byte lengths BIP-39 defines, with their word counts.
const VALID_ENTROPY_BITS: [u32; 5] = [128, 160, 192, 224, 256];

fn word_count_for_entropy_bits(entropy_bits: u32) -> Result<usize> {
    if !VALID_ENTROPY_BITS.contains(&entropy_bits) {
        return Err(Error::Bip39InvalidEntropySize);
    }
    Ok(((entropy_bits + entropy_bits / 32) / 11) as usize)
}

/// Converts raw entropy into its checksummed mnemonic sentence.
///
/// `entropy` must be 16/20/24/28/32 bytes (128/160/192/224/256 bits); any
/// other length is rejected.
pub(crate) fn entropy_to_mnemonic(entropy: &[u8]) -> Result<String> {
    let entropy_bits = entropy.len() as u32 * 8;
    let word_count = word_count_for_entropy_bits(entropy_bits)?;
    let checksum_bits = entropy_bits / 32;

    let checksum_byte = sha256(entropy)[0];

    // Build the full entropy||checksum bitstring, then split into 11-bit
    // word indices, most significant bit first.
    let mut bits: Vec<bool> = Vec::with_capacity(entropy_bits as usize + checksum_bits as usize);
    for &byte in entropy {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    for i in (8 - checksum_bits..8).rev() {
        bits.push((checksum_byte >> i) & 1 == 1);
    }

    let mut words = Vec::with_capacity(word_count);
    for chunk in bits.chunks(11) {
        let mut index: usize = 0;
        for &bit in chunk {
            index = (index << 1) | (bit as usize);
        }
        words.push(WORDLIST[index]);
    }

    Ok(words.join(" "))
}

/// Validates a mnemonic's word count and checksum, without recovering the
/// original entropy (the caller never needs it back).
pub(crate) fn validate_mnemonic(mnemonic: &str) -> Result<()> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    let word_count = words.len() as u32;
    if ![12, 15, 18, 21, 24].contains(&word_count) {
        return Err(Error::Bip39InvalidPhraseSize);
    }

    let mut bits: Vec<bool> = Vec::with_capacity(words.len() * 11);
    for word in &words {
        let index = WORDLIST
            .iter()
            .position(|&w| w == *word)
            .ok_or(Error::Bip39InvalidWord)?;
        for i in (0..11).rev() {
            bits.push((index >> i) & 1 == 1);
        }
    }

    let total_bits = bits.len() as u32;
    let checksum_bits = total_bits / 33;
    let entropy_bits = total_bits - checksum_bits;

    let mut entropy = alloc::vec![0u8; (entropy_bits / 8) as usize];
    for (i, byte) in entropy.iter_mut().enumerate() {
        let mut value = 0u8;
        for b in 0..8 {
            value = (value << 1) | bits[i * 8 + b] as u8;
        }
        *byte = value;
    }

    let checksum_byte = sha256(&entropy)[0];
    for i in 0..checksum_bits {
        let expected = (checksum_byte >> (7 - i)) & 1 == 1;
        if bits[entropy_bits as usize + i as usize] != expected {
            return Err(Error::Bip39InvalidChecksum);
        }
    }

    Ok(())
}

/// PBKDF2-HMAC-SHA-512(mnemonic, "mnemonic" || passphrase, 2048, 64).
pub(crate) fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> [u8; SEED_SIZE] {
    let mut salt = Vec::with_capacity(8 + passphrase.len());
    salt.extend_from_slice(b"mnemonic");
    salt.extend_from_slice(passphrase.as_bytes());
    pbkdf2_hmac_sha512(mnemonic.as_bytes(), &salt, PBKDF2_ROUNDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        use core::fmt::Write;
        let mut s = String::new();
        for b in bytes {
            let _ = write!(s, "{:02x}", b);
        }
        s
    }

    #[test]
    fn zero_entropy_vector() {
        let entropy = [0u8; 16];
        let mnemonic = entropy_to_mnemonic(&entropy).unwrap();
        assert_eq!(
            mnemonic,
            "abandon abandon abandon abandon abandon abandon abandon abandon \
             abandon abandon abandon about"
        );
        let seed = mnemonic_to_seed(&mnemonic, "");
        assert_eq!(
            hex(&seed),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a69\
             87599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn mnemonic_validates() {
        let entropy = [0u8; 16];
        let mnemonic = entropy_to_mnemonic(&entropy).unwrap();
        validate_mnemonic(&mnemonic).unwrap();
    }

    #[test]
    fn rejects_unsupported_entropy_size() {
        let entropy = [0u8; 17];
        assert_eq!(
            entropy_to_mnemonic(&entropy).unwrap_err(),
            Error::Bip39InvalidEntropySize
        );
    }

    #[test]
    fn rejects_tampered_checksum() {
        let entropy = [0u8; 16];
        let mnemonic = entropy_to_mnemonic(&entropy).unwrap();
        let mut words: Vec<&str> = mnemonic.split_whitespace().collect();
        let last = words.len() - 1;
        words[last] = "zoo";
        let tampered = words.join(" ");
        assert_eq!(
            validate_mnemonic(&tampered).unwrap_err(),
            Error::Bip39InvalidChecksum
        );
    }
}
