mod crypto;
mod error;
pub mod storage;

pub use crate::crypto::container::MAGIC;
pub use crate::crypto::kdf::DEFAULT_ROUNDS;
pub use crate::crypto::{
    BLOCK_LEN, HEADER_LEN, IV_LEN, KEY_LEN, KdfParams, SALT_LEN, derive_key_iv, open, seal,
};
pub use crate::error::CryptoError;

use anyhow::{Context, Result};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use zeroize::Zeroizing;

/// Encrypts text into a base64-encoded `Salted__` container.
///
/// This is the shape the CLI prints and the shape `openssl enc -base64`
/// understands.
pub fn encrypt_text(plaintext: &[u8], password: &[u8], kdf: KdfParams) -> Result<String> {
    let container = crypto::seal(plaintext, password, kdf)?;
    Ok(BASE64.encode(container))
}

/// Decrypts a base64-encoded `Salted__` container back into text.
///
/// Surrounding whitespace on the input is ignored so piped and file-read
/// containers behave the same.
pub fn decrypt_text(encoded: &str, password: &[u8], kdf: KdfParams) -> Result<Zeroizing<String>> {
    let container = BASE64
        .decode(encoded.trim())
        .context("input is not valid base64")?;

    let plaintext = crypto::open(&container, password, kdf)?;
    let text = std::str::from_utf8(&plaintext).context("decrypted bytes are not valid UTF-8")?;

    Ok(Zeroizing::new(text.to_string()))
}
