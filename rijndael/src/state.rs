//! The 4x4 working state for one block and its round transformations

use crate::gf;
use crate::sbox::{INV_SBOX, SBOX};

/// Block length in bytes. Fixed at 128 bits for every key size.
pub const BLOCK_SIZE: usize = 16;

/// One 16-byte block as a 4x4 matrix, indexed `[row][col]`.
///
/// Bytes arrive from the stream row-major and are converted to the cipher's
/// column-major convention by a single [`State::transpose`] on entry; the
/// same transpose converts back on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    data: [[u8; 4]; 4],
}

impl State {
    /// Loads a block from stream order and transposes it into state order.
    pub fn from_stream(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut data = [[0u8; 4]; 4];
        for row in 0..4 {
            for col in 0..4 {
                data[row][col] = bytes[row * 4 + col];
            }
        }
        let mut state = State { data };
        state.transpose();
        state
    }

    /// Transposes back and returns the block in stream order.
    pub fn to_stream(mut self) -> [u8; BLOCK_SIZE] {
        self.transpose();
        let mut bytes = [0u8; BLOCK_SIZE];
        for row in 0..4 {
            for col in 0..4 {
                bytes[row * 4 + col] = self.data[row][col];
            }
        }
        bytes
    }

    /// Swaps rows and columns in place. Self-inverse, applied exactly once
    /// on entry and once on exit of every block operation.
    pub fn transpose(&mut self) {
        for i in 0..4 {
            for j in (i + 1)..4 {
                let temp = self.data[i][j];
                self.data[i][j] = self.data[j][i];
                self.data[j][i] = temp;
            }
        }
    }

    /// SubBytes: replaces every byte with its S-box value.
    pub fn sub_bytes(&mut self) {
        for row in 0..4 {
            for col in 0..4 {
                self.data[row][col] = SBOX[self.data[row][col] as usize];
            }
        }
    }

    /// InvSubBytes: replaces every byte with its inverse S-box value.
    pub fn inv_sub_bytes(&mut self) {
        for row in 0..4 {
            for col in 0..4 {
                self.data[row][col] = INV_SBOX[self.data[row][col] as usize];
            }
        }
    }

    /// ShiftRows: row r is rotated r positions to the left.
    pub fn shift_rows(&mut self) {
        for row in 1..4 {
            let temp = self.data[row];
            for col in 0..4 {
                self.data[row][col] = temp[(col + row) % 4];
            }
        }
    }

    /// InvShiftRows: row r is rotated r positions to the right.
    pub fn inv_shift_rows(&mut self) {
        for row in 1..4 {
            let temp = self.data[row];
            for col in 0..4 {
                self.data[row][col] = temp[(col + 4 - row) % 4];
            }
        }
    }

    /// MixColumns: multiplies each column by the fixed matrix
    /// `[2 3 1 1 / 1 2 3 1 / 1 1 2 3 / 3 1 1 2]` over GF(2^8).
    pub fn mix_columns(&mut self) {
        for col in 0..4 {
            let temp = [
                self.data[0][col],
                self.data[1][col],
                self.data[2][col],
                self.data[3][col],
            ];

            self.data[0][col] = gf::mul(2, temp[0]) ^ gf::mul(3, temp[1]) ^ temp[2] ^ temp[3];
            self.data[1][col] = temp[0] ^ gf::mul(2, temp[1]) ^ gf::mul(3, temp[2]) ^ temp[3];
            self.data[2][col] = temp[0] ^ temp[1] ^ gf::mul(2, temp[2]) ^ gf::mul(3, temp[3]);
            self.data[3][col] = gf::mul(3, temp[0]) ^ temp[1] ^ temp[2] ^ gf::mul(2, temp[3]);
        }
    }

    /// InvMixColumns: multiplies each column by the inverse matrix
    /// `[e b d 9 / 9 e b d / d 9 e b / b d 9 e]` over GF(2^8).
    pub fn inv_mix_columns(&mut self) {
        for col in 0..4 {
            let temp = [
                self.data[0][col],
                self.data[1][col],
                self.data[2][col],
                self.data[3][col],
            ];

            self.data[0][col] = gf::mul(0x0e, temp[0])
                ^ gf::mul(0x0b, temp[1])
                ^ gf::mul(0x0d, temp[2])
                ^ gf::mul(0x09, temp[3]);
            self.data[1][col] = gf::mul(0x09, temp[0])
                ^ gf::mul(0x0e, temp[1])
                ^ gf::mul(0x0b, temp[2])
                ^ gf::mul(0x0d, temp[3]);
            self.data[2][col] = gf::mul(0x0d, temp[0])
                ^ gf::mul(0x09, temp[1])
                ^ gf::mul(0x0e, temp[2])
                ^ gf::mul(0x0b, temp[3]);
            self.data[3][col] = gf::mul(0x0b, temp[0])
                ^ gf::mul(0x0d, temp[1])
                ^ gf::mul(0x09, temp[2])
                ^ gf::mul(0x0e, temp[3]);
        }
    }

    /// AddRoundKey: XORs the four schedule words at offset `4 * round` into
    /// the state, one word per column, most-significant byte into row 0.
    pub fn add_round_key(&mut self, schedule: &[u32], round: usize) {
        let base = round * 4;
        for col in 0..4 {
            let word = schedule[base + col];
            self.data[0][col] ^= (word >> 24) as u8;
            self.data[1][col] ^= (word >> 16) as u8;
            self.data[2][col] ^= (word >> 8) as u8;
            self.data[3][col] ^= word as u8;
        }
    }
}
