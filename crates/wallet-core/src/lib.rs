//! A self-contained hierarchical-deterministic wallet core: secp256k1
//! arithmetic, BIP-39 mnemonics, BIP-32 key derivation, Base58Check,
//! Bech32, and WIF encoding, with no external elliptic-curve or
//! encoding-primitive dependency. SHA-256, HMAC-SHA-512 and PBKDF2 come
//! from RustCrypto.
//!
//! The crate is purely functional: every operation is a pure function from
//! its arguments to a [`Result`], with no shared state and no I/O beyond the
//! OS randomness draw in [`wallet::generate`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;

mod address;
mod bip32;
mod bip39;
mod encoding;
mod hash;
mod secp256k1;
mod wif;

pub mod derive;
pub mod wallet;

pub use error::{Error, Result};
pub use wallet::{generate_with_entropy, DerivationLevel, HdWallet};
pub use derive::derive_wif_from_xprv;

#[cfg(feature = "std")]
pub use wallet::generate;

/// Testnet extended-private-key version (`tprv`).
pub const TPRV_VERSION: u32 = 0x0435_8394;
/// Testnet extended-public-key version (`tpub`).
pub const TPUB_VERSION: u32 = 0x0435_87CF;
/// Testnet WIF version byte.
pub const WIF_VERSION: u8 = 0xEF;
/// This project's Bech32 human-readable prefix.
pub const DEFAULT_HRP: &str = "crnrt";
/// Default derivation path used when a caller doesn't supply one.
pub const DEFAULT_DERIVATION_PATH: &str = "m/84h/1h/0h/0/0";
