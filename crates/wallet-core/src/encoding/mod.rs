//! Base58(Check) and Bech32, the two text encodings the wallet core needs.
//! Both are hand-rolled: the spec treats them, like secp256k1, as needing no
//! external crypto dependency.

pub(crate) mod base58;
pub(crate) mod bech32;
