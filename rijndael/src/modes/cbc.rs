//! CBC (Cipher Block Chaining) mode

use crate::cipher::BlockCipher;
use crate::state::BLOCK_SIZE;

/// Per-stream feedback state for CBC: the session IV, the most recent
/// ciphertext block, and whether the next block is the first of the stream.
///
/// Mutated after every block; blocks must be fed strictly in stream order
/// because each transform depends on the previous block's ciphertext.
#[derive(Debug, Clone)]
pub struct ChainingContext {
    iv: [u8; BLOCK_SIZE],
    prev_cipher: [u8; BLOCK_SIZE],
    first: bool,
}

fn xor_blocks(a: &[u8; BLOCK_SIZE], b: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = a[i] ^ b[i];
    }
    out
}

impl ChainingContext {
    pub fn new(iv: [u8; BLOCK_SIZE]) -> Self {
        ChainingContext {
            iv,
            prev_cipher: [0u8; BLOCK_SIZE],
            first: true,
        }
    }

    /// Encrypts one block: XOR with the IV (first block) or the previously
    /// produced ciphertext, then run the forward cipher. The output becomes
    /// the feedback for the next call.
    pub fn encrypt_block<C: BlockCipher>(
        &mut self,
        cipher: &C,
        block: &[u8; BLOCK_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        let feedback = if self.first { &self.iv } else { &self.prev_cipher };
        let ciphertext = cipher.encrypt_block(&xor_blocks(block, feedback));

        self.first = false;
        self.prev_cipher = ciphertext;
        ciphertext
    }

    /// Decrypts one block: run the inverse cipher, then XOR with the IV
    /// (first block) or the previously seen ciphertext.
    ///
    /// The incoming ciphertext is captured before the inverse transform runs,
    /// so the feedback for the next block cannot be lost to an in-place
    /// overwrite.
    pub fn decrypt_block<C: BlockCipher>(
        &mut self,
        cipher: &C,
        block: &[u8; BLOCK_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        let captured = *block;
        let decrypted = cipher.decrypt_block(block);
        let feedback = if self.first { &self.iv } else { &self.prev_cipher };
        let plaintext = xor_blocks(&decrypted, feedback);

        self.first = false;
        self.prev_cipher = captured;
        plaintext
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::RijndaelCipher;
    use crate::key::CipherKey;

    const IV: [u8; 16] = [
        0x0f, 0x0e, 0x0d, 0x0c, 0x0b, 0x0a, 0x09, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01,
        0x00,
    ];

    fn test_cipher() -> RijndaelCipher {
        let key = CipherKey::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
        RijndaelCipher::new(&key)
    }

    #[test]
    fn test_multi_block_round_trip() {
        let cipher = test_cipher();
        let message: Vec<[u8; 16]> = vec![[0x11; 16], [0x22; 16], [0x33; 16], [0x22; 16]];

        let mut enc = ChainingContext::new(IV);
        let ciphertext: Vec<[u8; 16]> = message
            .iter()
            .map(|block| enc.encrypt_block(&cipher, block))
            .collect();

        let mut dec = ChainingContext::new(IV);
        let recovered: Vec<[u8; 16]> = ciphertext
            .iter()
            .map(|block| dec.decrypt_block(&cipher, block))
            .collect();

        assert_eq!(recovered, message);
    }

    #[test]
    fn test_equal_plaintext_blocks_differ_in_ciphertext() {
        let cipher = test_cipher();
        let mut ctx = ChainingContext::new(IV);

        let first = ctx.encrypt_block(&cipher, &[0xab; 16]);
        let second = ctx.encrypt_block(&cipher, &[0xab; 16]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_first_block_chains_from_iv() {
        let cipher = test_cipher();
        let block = [0x42; 16];

        let mut ctx = ChainingContext::new([0u8; 16]);
        let with_zero_iv = ctx.encrypt_block(&cipher, &block);

        // A zero IV makes the first CBC block identical to plain encryption.
        assert_eq!(with_zero_iv, cipher.encrypt_block(&block));

        let mut ctx = ChainingContext::new(IV);
        assert_ne!(ctx.encrypt_block(&cipher, &block), with_zero_iv);
    }

    #[test]
    fn test_decrypt_feedback_uses_captured_ciphertext() {
        let cipher = test_cipher();
        let message = [[0x01; 16], [0x02; 16], [0x03; 16]];

        let mut enc = ChainingContext::new(IV);
        let ciphertext: Vec<[u8; 16]> = message
            .iter()
            .map(|block| enc.encrypt_block(&cipher, block))
            .collect();

        // Decrypting out of the middle with the right feedback block still
        // recovers the plaintext; the context must have stored the raw
        // ciphertext, not the decrypted working buffer.
        let mut dec = ChainingContext::new(IV);
        let _ = dec.decrypt_block(&cipher, &ciphertext[0]);
        let second = dec.decrypt_block(&cipher, &ciphertext[1]);
        let third = dec.decrypt_block(&cipher, &ciphertext[2]);
        assert_eq!(second, message[1]);
        assert_eq!(third, message[2]);
    }
}
