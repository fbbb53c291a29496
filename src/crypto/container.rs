//! The legacy `Salted__` container: 8-byte marker, 8-byte salt, ciphertext.
//!
//! This byte layout is the one wire-format contract of the crate and must
//! stay bit-compatible with `openssl enc` and the many tools that imitate it.

use zeroize::{Zeroize, Zeroizing};

use super::kdf::KdfParams;
use super::{HEADER_LEN, MAGIC_LEN, cipher, kdf};
use crate::error::CryptoError;

/// Marker bytes opening every container.
pub const MAGIC: &[u8; MAGIC_LEN] = b"Salted__";

/// Encrypts plaintext into a `Salted__` container.
///
/// A fresh random salt is drawn per call, so sealing the same input twice
/// yields different containers that both open with the same password.
pub fn seal(plaintext: &[u8], password: &[u8], kdf: KdfParams) -> Result<Vec<u8>, CryptoError> {
    let salt = cipher::generate_salt()?;
    let (mut key, mut iv) = kdf::derive_key_iv(password, &salt, kdf)?;

    let ciphertext = cipher::encrypt(&key, &iv, plaintext);
    key.zeroize();
    iv.zeroize();

    let mut container = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    container.extend_from_slice(MAGIC);
    container.extend_from_slice(&salt);
    container.extend_from_slice(&ciphertext);

    Ok(container)
}

/// Decrypts a `Salted__` container.
///
/// The first 8 bytes are skipped without being compared against [`MAGIC`];
/// tools in the wild emit the marker but readers traditionally do not reject
/// on its content, and tightening that would change which inputs are
/// accepted. Anything shorter than the 16-byte header is rejected outright.
pub fn open(
    container: &[u8],
    password: &[u8],
    kdf: KdfParams,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if container.len() < HEADER_LEN {
        return Err(CryptoError::TooShort(container.len()));
    }

    let salt = &container[MAGIC_LEN..HEADER_LEN];
    let ciphertext = &container[HEADER_LEN..];

    let (mut key, mut iv) = kdf::derive_key_iv(password, salt, kdf)?;
    let plaintext = cipher::decrypt(&key, &iv, ciphertext);
    key.zeroize();
    iv.zeroize();

    plaintext
}
