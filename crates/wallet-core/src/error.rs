//! Error type.

use core::fmt::{self, Display};

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by the wallet core.
///
/// The core recovers from nothing internally: every failure mode below is
/// meant to propagate to the caller as a typed value, per the error handling
/// policy — invalid input is never silently coerced into a "best effort"
/// result.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Base58 alphabet or checksum error.
    Base58,

    /// Bech32 HRP, charset, or checksum error.
    Bech32,

    /// BIP-39 entropy size unsupported.
    Bip39InvalidEntropySize,

    /// BIP-39 mnemonic word count doesn't match a supported entropy size.
    Bip39InvalidPhraseSize,

    /// BIP-39 word not present in the wordlist.
    Bip39InvalidWord,

    /// BIP-39 checksum bits didn't match.
    Bip39InvalidChecksum,

    /// Child number or derivation path segment couldn't be parsed.
    InvalidPath,

    /// Extended key is the wrong length or has an unrecognized version.
    InvalidExtendedKey,

    /// Scalar or point arithmetic was asked to do something undefined,
    /// e.g. multiply by a zero scalar.
    Crypto,

    /// CKDpriv produced `I_L >= N` or a zero child key (probability ~2^-127).
    DerivationFailure,

    /// Maximum derivation depth (255) exceeded.
    Depth,

    /// A fixed-size field (seed, chain code, key) had the wrong length.
    Decode,

    /// The OS randomness source failed.
    EntropySourceFailure,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Base58 => f.write_str("base58 error"),
            Error::Bech32 => f.write_str("bech32 error"),
            Error::Bip39InvalidEntropySize => f.write_str("bip39 entropy must be 128/160/192/224/256 bits"),
            Error::Bip39InvalidPhraseSize => f.write_str("bip39 invalid phrase size"),
            Error::Bip39InvalidWord => f.write_str("bip39 word not in wordlist"),
            Error::Bip39InvalidChecksum => f.write_str("bip39 invalid checksum"),
            Error::InvalidPath => f.write_str("invalid derivation path"),
            Error::InvalidExtendedKey => f.write_str("invalid extended key"),
            Error::Crypto => f.write_str("cryptographic error"),
            Error::DerivationFailure => f.write_str("child key derivation failed"),
            Error::Depth => f.write_str("maximum derivation depth exceeded"),
            Error::Decode => f.write_str("decoding error"),
            Error::EntropySourceFailure => f.write_str("entropy source failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Error {
        Error::Decode
    }
}

impl From<hmac::digest::InvalidLength> for Error {
    fn from(_: hmac::digest::InvalidLength) -> Error {
        Error::Crypto
    }
}
