use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{IV_LEN, KEY_LEN, SALT_LEN};
use crate::error::CryptoError;

/// Default PBKDF2 iteration count, matching `openssl enc -pbkdf2 -iter 10000`.
pub const DEFAULT_ROUNDS: u32 = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct KdfParams {
    rounds: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl KdfParams {
    pub fn new(rounds: u32) -> Result<Self, CryptoError> {
        let params = Self { rounds };
        params.validate()?;
        Ok(params)
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.rounds < 1 {
            return Err(CryptoError::InvalidRounds);
        }
        Ok(())
    }
}

/// Derives the AES key and IV from a password and an 8-byte salt.
///
/// Runs PBKDF2-HMAC-SHA256 for `kdf.rounds()` iterations, producing 48 bytes
/// which are split into the 32-byte key followed by the 16-byte IV. The split
/// order is part of the container format; both directions must agree on it.
pub fn derive_key_iv(
    password: &[u8],
    salt: &[u8],
    kdf: KdfParams,
) -> Result<([u8; KEY_LEN], [u8; IV_LEN]), CryptoError> {
    kdf.validate()?;

    if salt.len() != SALT_LEN {
        return Err(CryptoError::SaltLength(salt.len()));
    }

    let mut material = Zeroizing::new([0u8; KEY_LEN + IV_LEN]);
    pbkdf2::<Hmac<Sha256>>(password, salt, kdf.rounds(), &mut material[..])
        .map_err(|_| CryptoError::Derivation)?;

    let mut key = [0u8; KEY_LEN];
    let mut iv = [0u8; IV_LEN];
    key.copy_from_slice(&material[..KEY_LEN]);
    iv.copy_from_slice(&material[KEY_LEN..]);

    Ok((key, iv))
}
