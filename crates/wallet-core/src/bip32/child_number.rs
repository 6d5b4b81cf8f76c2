//! A single BIP-32 derivation index, hardened or not.

use alloc::string::String;
use core::str::FromStr;

use crate::error::{Error, Result};

const HARDENED_FLAG: u32 = 1 << 31;

/// One segment of a derivation path, e.g. `84h` or `0`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct ChildNumber(pub(crate) u32);

impl ChildNumber {
    pub(crate) fn is_hardened(self) -> bool {
        self.0 & HARDENED_FLAG != 0
    }

    /// `ser32(i)`: big-endian 4-byte serialization.
    pub(crate) fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub(crate) fn from_bytes(bytes: [u8; 4]) -> ChildNumber {
        ChildNumber(u32::from_be_bytes(bytes))
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(segment: &str) -> Result<ChildNumber> {
        let (digits, hardened) = match segment.strip_suffix('\'').or_else(|| segment.strip_suffix('h')) {
            Some(rest) => (rest, true),
            None => (segment, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPath);
        }
        let index: u32 = digits.parse().map_err(|_| Error::InvalidPath)?;
        if index & HARDENED_FLAG != 0 {
            return Err(Error::InvalidPath);
        }
        Ok(ChildNumber(if hardened { index | HARDENED_FLAG } else { index }))
    }
}

impl core::fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_hardened() {
            write!(f, "{}h", self.0 & !HARDENED_FLAG)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

pub(crate) fn path_segment_string(child: ChildNumber) -> String {
    alloc::format!("{child}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hardened_with_h_and_apostrophe() {
        assert_eq!("84h".parse::<ChildNumber>().unwrap(), ChildNumber(84 | HARDENED_FLAG));
        assert_eq!("84'".parse::<ChildNumber>().unwrap(), ChildNumber(84 | HARDENED_FLAG));
    }

    #[test]
    fn parses_non_hardened() {
        assert_eq!("0".parse::<ChildNumber>().unwrap(), ChildNumber(0));
    }

    #[test]
    fn rejects_garbage_suffix() {
        assert!("1x".parse::<ChildNumber>().is_err());
    }

    #[test]
    fn rejects_empty_segment() {
        assert!("".parse::<ChildNumber>().is_err());
    }
}
