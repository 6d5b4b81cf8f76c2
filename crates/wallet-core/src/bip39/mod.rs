//! BIP-39 mnemonic generation and seed derivation.

mod mnemonic;
mod wordlist;

pub(crate) use mnemonic::{entropy_to_mnemonic, mnemonic_to_seed, validate_mnemonic};
