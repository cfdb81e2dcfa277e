//! Cipher sessions: the interface the I/O collaborator drives

use crate::cipher::RijndaelCipher;
use crate::error::{CipherError, Result};
use crate::key::CipherKey;
use crate::modes::{cbc, ecb};
use crate::state::BLOCK_SIZE;

/// Block-chaining construction selected at session creation.
///
/// GCM is a recognized tag with no implementation behind it; requesting it
/// fails session creation instead of silently passing data through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construction {
    Ecb,
    Cbc,
    Gcm,
}

/// Direction of a block transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

/// One cipher session: an expanded key schedule plus, for CBC, the chaining
/// context. Owns all of its state exclusively; everything is released by
/// ownership when the session is dropped or closed.
#[derive(Debug)]
pub struct Session {
    cipher: RijndaelCipher,
    chaining: Option<cbc::ChainingContext>,
}

impl Session {
    /// Creates a session, expanding the key schedule once.
    ///
    /// CBC requires a 16-byte IV; GCM is rejected with
    /// [`CipherError::UnsupportedConstruction`].
    pub fn new(
        key: CipherKey,
        construction: Construction,
        iv: Option<[u8; BLOCK_SIZE]>,
    ) -> Result<Session> {
        let chaining = match construction {
            Construction::Ecb => None,
            Construction::Cbc => {
                let iv = iv.ok_or(CipherError::InvalidIvLength { bytes: 0 })?;
                Some(cbc::ChainingContext::new(iv))
            }
            Construction::Gcm => {
                return Err(CipherError::UnsupportedConstruction("GCM".to_string()));
            }
        };

        Ok(Session {
            cipher: RijndaelCipher::new(&key),
            chaining,
        })
    }

    /// Transforms exactly one 16-byte block. Anything shorter or longer is
    /// rejected with [`CipherError::IncompleteFinalBlock`]; no padding scheme
    /// is applied. Blocks must arrive strictly in stream order.
    pub fn transform_block(&mut self, block: &[u8], mode: Mode) -> Result<[u8; BLOCK_SIZE]> {
        let block: &[u8; BLOCK_SIZE] = block
            .try_into()
            .map_err(|_| CipherError::IncompleteFinalBlock { bytes: block.len() })?;

        Ok(match (&mut self.chaining, mode) {
            (None, Mode::Encrypt) => ecb::encrypt_block(&self.cipher, block),
            (None, Mode::Decrypt) => ecb::decrypt_block(&self.cipher, block),
            (Some(context), Mode::Encrypt) => context.encrypt_block(&self.cipher, block),
            (Some(context), Mode::Decrypt) => context.decrypt_block(&self.cipher, block),
        })
    }

    /// Transforms a whole message of 16-byte blocks in stream order.
    ///
    /// A trailing partial block is rejected before any block is processed.
    pub fn transform_stream(&mut self, data: &[u8], mode: Mode) -> Result<Vec<u8>> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::IncompleteFinalBlock {
                bytes: data.len() % BLOCK_SIZE,
            });
        }

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks(BLOCK_SIZE) {
            out.extend_from_slice(&self.transform_block(chunk, mode)?);
        }
        Ok(out)
    }

    /// Ends the session, releasing the schedule and chaining state.
    pub fn close(self) {}
}

/// Decodes a CBC IV from a hex string of exactly 32 characters.
pub fn parse_iv_hex(text: &str) -> Result<[u8; BLOCK_SIZE]> {
    if text.len() != 2 * BLOCK_SIZE {
        return Err(CipherError::InvalidIvLength {
            bytes: text.len() / 2,
        });
    }

    let bytes = hex::decode(text).map_err(|_| CipherError::IllegalKeyCharacter)?;
    let mut iv = [0u8; BLOCK_SIZE];
    iv.copy_from_slice(&bytes);
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

    fn test_key() -> CipherKey {
        CipherKey::from_hex(KEY_HEX).unwrap()
    }

    #[test]
    fn test_ecb_session_round_trip() {
        let mut enc = Session::new(test_key(), Construction::Ecb, None).unwrap();
        let mut dec = Session::new(test_key(), Construction::Ecb, None).unwrap();

        let message = [0x55u8; 48];
        let ciphertext = enc.transform_stream(&message, Mode::Encrypt).unwrap();
        let recovered = dec.transform_stream(&ciphertext, Mode::Decrypt).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_cbc_session_round_trip() {
        let iv = parse_iv_hex("101112131415161718191a1b1c1d1e1f").unwrap();
        let mut enc = Session::new(test_key(), Construction::Cbc, Some(iv)).unwrap();
        let mut dec = Session::new(test_key(), Construction::Cbc, Some(iv)).unwrap();

        let message: Vec<u8> = (0..64).map(|i| i as u8).collect();
        let ciphertext = enc.transform_stream(&message, Mode::Encrypt).unwrap();
        assert_ne!(ciphertext, message);
        let recovered = dec.transform_stream(&ciphertext, Mode::Decrypt).unwrap();
        assert_eq!(recovered, message);
    }

    #[test]
    fn test_ecb_leaks_block_equality_and_cbc_hides_it() {
        let two_equal_blocks = [0xabu8; 32];

        let mut ecb = Session::new(test_key(), Construction::Ecb, None).unwrap();
        let ecb_out = ecb.transform_stream(&two_equal_blocks, Mode::Encrypt).unwrap();
        assert_eq!(ecb_out[..16], ecb_out[16..]);

        let iv = [0x77u8; 16];
        let mut cbc = Session::new(test_key(), Construction::Cbc, Some(iv)).unwrap();
        let cbc_out = cbc.transform_stream(&two_equal_blocks, Mode::Encrypt).unwrap();
        assert_ne!(cbc_out[..16], cbc_out[16..]);
    }

    #[test]
    fn test_gcm_is_rejected_at_creation() {
        let result = Session::new(test_key(), Construction::Gcm, None);
        assert_eq!(
            result.unwrap_err(),
            CipherError::UnsupportedConstruction("GCM".to_string())
        );
    }

    #[test]
    fn test_cbc_without_iv_is_rejected() {
        let result = Session::new(test_key(), Construction::Cbc, None);
        assert_eq!(result.unwrap_err(), CipherError::InvalidIvLength { bytes: 0 });
    }

    #[test]
    fn test_partial_block_is_rejected() {
        let mut session = Session::new(test_key(), Construction::Ecb, None).unwrap();
        assert_eq!(
            session.transform_block(&[0u8; 15], Mode::Encrypt).unwrap_err(),
            CipherError::IncompleteFinalBlock { bytes: 15 }
        );
        assert_eq!(
            session.transform_stream(&[0u8; 17], Mode::Encrypt).unwrap_err(),
            CipherError::IncompleteFinalBlock { bytes: 1 }
        );
    }

    #[test]
    fn test_short_iv_hex_is_rejected() {
        // 30 hex characters decode to 15 bytes
        assert_eq!(
            parse_iv_hex("101112131415161718191a1b1c1d1e").unwrap_err(),
            CipherError::InvalidIvLength { bytes: 15 }
        );
        assert_eq!(
            parse_iv_hex("zz1112131415161718191a1b1c1d1e1f").unwrap_err(),
            CipherError::IllegalKeyCharacter
        );
    }
}
