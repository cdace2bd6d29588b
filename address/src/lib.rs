//! Rust CryptoNote Address Library
//!
//! This library provides encoding and decoding of CryptoNote public
//! addresses as used by TurtleCoin, Monero and other CryptoNote networks:
//! a varint network prefix followed by the public spend and view keys (and
//! a payment id for integrated addresses), protected by a 4-byte
//! `cn_fast_hash` checksum and rendered in block base58.
//!
//! The codec is pure and stateless; every call works on its own buffers
//! and the types are freely shareable across threads.

// Do NOT use actual-serde directly, use the `serde` feature and this alias.
#[cfg(feature = "serde")]
pub extern crate actual_serde as serde;

pub use cryptonote_hashes;

pub mod address;
pub mod base58;
pub mod error;
pub mod varint;

pub use address::{Address, PaymentId, PublicKey, TURTLECOIN_PUBLIC_ADDRESS_PREFIX};
pub use error::{Error, Result};
