//! Error types for cipher sessions

use thiserror::Error;

/// Errors reported by key parsing, session creation and block transforms.
///
/// Every variant is fatal for the current session: there is no retry and no
/// degraded mode, and the caller must not feed further blocks after seeing one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("invalid key length: {bits} bits (must be 128, 192 or 256)")]
    InvalidKeyLength { bits: usize },

    #[error("illegal character in hex key material")]
    IllegalKeyCharacter,

    #[error("invalid IV length: {bytes} bytes (must be 16)")]
    InvalidIvLength { bytes: usize },

    #[error("unsupported cipher construction: {0}")]
    UnsupportedConstruction(String),

    #[error("incomplete final block: {bytes} bytes (blocks are 16 bytes)")]
    IncompleteFinalBlock { bytes: usize },
}

pub type Result<T> = std::result::Result<T, CipherError>;
