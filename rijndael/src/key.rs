//! Cipher key material and the parameters derived from its length

use crate::error::{CipherError, Result};

/// A validated AES key: 4, 6 or 8 big-endian 32-bit words.
///
/// Immutable once constructed; the round count and round-constant table size
/// are derived from the word count and never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherKey {
    words: Vec<u32>,
}

impl CipherKey {
    /// Builds a key from already-decoded words.
    ///
    /// Word counts other than 4, 6 or 8 are rejected with
    /// [`CipherError::InvalidKeyLength`].
    pub fn from_words(words: Vec<u32>) -> Result<Self> {
        match words.len() {
            4 | 6 | 8 => Ok(CipherKey { words }),
            n => Err(CipherError::InvalidKeyLength { bits: n * 32 }),
        }
    }

    /// Decodes a key from a hex string of exactly 32, 48 or 64 characters,
    /// most-significant nibble first.
    pub fn from_hex(text: &str) -> Result<Self> {
        match text.len() {
            32 | 48 | 64 => {}
            n => return Err(CipherError::InvalidKeyLength { bits: n * 4 }),
        }

        let bytes = hex::decode(text).map_err(|_| CipherError::IllegalKeyCharacter)?;
        let words = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(CipherKey { words })
    }

    /// Key length in 32-bit words (4, 6 or 8).
    pub fn length_words(&self) -> usize {
        self.words.len()
    }

    /// Number of cipher rounds for this key size (10, 12 or 14).
    pub fn num_rounds(&self) -> usize {
        self.words.len() + 6
    }

    /// Number of round constants consumed by the key expansion (10, 8 or 7).
    pub fn rcon_len(&self) -> usize {
        match self.words.len() {
            4 => 10,
            6 => 8,
            _ => 7,
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
