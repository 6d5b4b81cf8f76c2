//! Extended-key version bytes. Only the testnet/regtest pair is exposed per
//! the versioning constants this wallet core is scoped to.

use crate::error::{Error, Result};

/// `tprv`.
pub(crate) const TPRV: u32 = 0x0435_8394;
/// `tpub`.
pub(crate) const TPUB: u32 = 0x0435_87CF;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Version {
    TPrv,
    TPub,
}

impl Version {
    pub(crate) fn to_bytes(self) -> [u8; 4] {
        match self {
            Version::TPrv => TPRV.to_be_bytes(),
            Version::TPub => TPUB.to_be_bytes(),
        }
    }

    pub(crate) fn from_bytes(bytes: [u8; 4]) -> Result<Version> {
        match u32::from_be_bytes(bytes) {
            TPRV => Ok(Version::TPrv),
            TPUB => Ok(Version::TPub),
            _ => Err(Error::InvalidExtendedKey),
        }
    }

    pub(crate) fn is_private(self) -> bool {
        matches!(self, Version::TPrv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips() {
        assert_eq!(Version::from_bytes(Version::TPrv.to_bytes()).unwrap(), Version::TPrv);
        assert_eq!(Version::from_bytes(Version::TPub.to_bytes()).unwrap(), Version::TPub);
    }

    #[test]
    fn rejects_unknown_version() {
        assert!(Version::from_bytes([0, 0, 0, 0]).is_err());
    }
}
