//! A full derivation path, e.g. `m/84h/1h/0h/0/0`.

use alloc::vec::Vec;
use core::str::FromStr;

use super::child_number::ChildNumber;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DerivationPath {
    pub(crate) indices: Vec<ChildNumber>,
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<DerivationPath> {
        let mut segments = path.split('/');
        if segments.next() != Some("m") {
            return Err(Error::InvalidPath);
        }

        let mut indices = Vec::new();
        for segment in segments {
            indices.push(segment.parse::<ChildNumber>()?);
        }
        Ok(DerivationPath { indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_path() {
        let path: DerivationPath = "m/84h/1h/0h/0/0".parse().unwrap();
        assert_eq!(path.indices.len(), 5);
        assert!(path.indices[0].is_hardened());
        assert!(!path.indices[3].is_hardened());
    }

    #[test]
    fn master_only_path_is_empty() {
        let path: DerivationPath = "m".parse().unwrap();
        assert!(path.indices.is_empty());
    }

    #[test]
    fn rejects_missing_m_prefix() {
        assert!("84h/1h".parse::<DerivationPath>().is_err());
    }

    #[test]
    fn rejects_invalid_segment() {
        assert_eq!(
            "m/84h/1x/0h".parse::<DerivationPath>().unwrap_err(),
            Error::InvalidPath
        );
    }
}
