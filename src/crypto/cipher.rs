use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use getrandom::fill;
use zeroize::Zeroizing;

use super::{BLOCK_LEN, IV_LEN, KEY_LEN, SALT_LEN};
use crate::error::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Generate a random 8-byte salt
pub fn generate_salt() -> Result<[u8; SALT_LEN], CryptoError> {
    let mut salt = [0u8; SALT_LEN];
    fill(&mut salt).map_err(|_| CryptoError::Random)?;
    Ok(salt)
}

/// Encrypt plaintext with AES-256-CBC and PKCS#7 padding.
///
/// The output length is always the next multiple of 16 above the plaintext
/// length; a plaintext that is already block-aligned gains a full pad block.
pub fn encrypt(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    Aes256CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext)
}

/// Decrypt ciphertext and strip verified PKCS#7 padding.
///
/// A padding mismatch almost always means a wrong password or a corrupted
/// container; it is reported as [`CryptoError::BadPadding`], never as
/// silently returned garbage.
pub fn decrypt(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::BadPadding);
    }

    let plaintext = Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::BadPadding)?;

    Ok(Zeroizing::new(plaintext))
}
