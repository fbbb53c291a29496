use std::fmt;

/// Failures of the key derivation, cipher, and container layers.
#[derive(Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// Container shorter than the 16-byte marker + salt header.
    TooShort(usize),
    /// Final-block padding did not verify after decryption.
    BadPadding,
    /// Salt was not exactly 8 bytes.
    SaltLength(usize),
    /// Iteration count was zero.
    InvalidRounds,
    /// The PBKDF2 primitive rejected the requested output length.
    Derivation,
    /// The OS random source failed.
    Random,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::TooShort(n) => {
                write!(f, "container too short: {n} bytes, need at least 16")
            }
            CryptoError::BadPadding => {
                write!(f, "bad padding: wrong password or corrupted input")
            }
            CryptoError::SaltLength(n) => write!(f, "salt must be 8 bytes, got {n}"),
            CryptoError::InvalidRounds => write!(f, "iteration count must be >= 1"),
            CryptoError::Derivation => write!(f, "key derivation failed"),
            CryptoError::Random => write!(f, "OS random generator unavailable"),
        }
    }
}

impl std::error::Error for CryptoError {}
