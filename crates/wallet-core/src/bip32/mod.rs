//! BIP-32 hierarchical deterministic key derivation: master key from seed,
//! CKDpriv, and extended-key (tprv/tpub) serialization.

mod child_number;
mod derivation_path;
mod extended_key;
mod version;
mod xprv;

pub(crate) use child_number::ChildNumber;
pub(crate) use derivation_path::DerivationPath;
pub(crate) use extended_key::ExtendedKey;
pub(crate) use xprv::ExtendedPrivateKey;
