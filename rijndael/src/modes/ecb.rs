//! ECB (Electronic Code Book) mode

use crate::cipher::BlockCipher;
use crate::state::BLOCK_SIZE;

/// Encrypts one block independently of every other block.
///
/// ECB carries no feedback: equal plaintext blocks under the same key yield
/// equal ciphertext blocks, and that equality is visible in the output.
pub fn encrypt_block<C: BlockCipher>(cipher: &C, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    cipher.encrypt_block(block)
}

/// Decrypts one block independently of every other block.
pub fn decrypt_block<C: BlockCipher>(cipher: &C, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    cipher.decrypt_block(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::RijndaelCipher;
    use crate::key::CipherKey;

    #[test]
    fn test_equal_blocks_leak_equality() {
        let key = CipherKey::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
        let cipher = RijndaelCipher::new(&key);
        let block = [0xab; 16];

        let first = encrypt_block(&cipher, &block);
        let second = encrypt_block(&cipher, &block);
        assert_eq!(first, second);
        assert_eq!(decrypt_block(&cipher, &first), block);
    }
}
