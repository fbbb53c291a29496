//! Cryptographic core: key derivation, block cipher, and container codec.
//!
//! Everything here is deterministic given its inputs except salt generation,
//! which is the only source of randomness in the crate.

pub mod cipher;
pub mod container;
pub mod kdf;

pub use cipher::generate_salt;
pub use container::{open, seal};
pub use kdf::{KdfParams, derive_key_iv};

/// Length of the container marker ("Salted__", 8 bytes).
pub const MAGIC_LEN: usize = 8;
/// Length of the salt (8 bytes).
pub const SALT_LEN: usize = 8;
/// Length of the encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
/// Length of the initialization vector (16 bytes).
pub const IV_LEN: usize = 16;
/// AES block length (16 bytes).
pub const BLOCK_LEN: usize = 16;
/// Container header length: marker plus salt.
pub const HEADER_LEN: usize = MAGIC_LEN + SALT_LEN;
