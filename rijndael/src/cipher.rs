//! The forward and inverse round pipelines

use crate::key::CipherKey;
use crate::schedule::KeySchedule;
use crate::state::{State, BLOCK_SIZE};

/// Seam between the round pipeline and the chaining modes: any cipher that
/// transforms one 16-byte block at a time.
pub trait BlockCipher {
    /// Encrypts a single block.
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE];

    /// Decrypts a single block.
    fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE];
}

/// Rijndael with a 128-bit block and a 128/192/256-bit key.
///
/// Owns its expanded key schedule; the schedule is built once and serves
/// every block of the session.
#[derive(Debug, Clone)]
pub struct RijndaelCipher {
    schedule: KeySchedule,
}

impl RijndaelCipher {
    pub fn new(key: &CipherKey) -> Self {
        RijndaelCipher {
            schedule: KeySchedule::expand(key),
        }
    }

    pub fn num_rounds(&self) -> usize {
        self.schedule.num_rounds()
    }
}

impl BlockCipher for RijndaelCipher {
    /// Forward cipher: initial whitening, `num_rounds - 1` full rounds, then
    /// a final round without MixColumns.
    fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.schedule.num_rounds();
        let words = self.schedule.words();
        let mut state = State::from_stream(block);

        state.add_round_key(words, 0);

        for round in 1..rounds {
            state.sub_bytes();
            state.shift_rows();
            state.mix_columns();
            state.add_round_key(words, round);
        }

        state.sub_bytes();
        state.shift_rows();
        state.add_round_key(words, rounds);

        state.to_stream()
    }

    /// Inverse cipher, working from the last round key back down; the final
    /// step omits InvMixColumns.
    fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let rounds = self.schedule.num_rounds();
        let words = self.schedule.words();
        let mut state = State::from_stream(block);

        state.add_round_key(words, rounds);

        for round in (1..rounds).rev() {
            state.inv_shift_rows();
            state.inv_sub_bytes();
            state.add_round_key(words, round);
            state.inv_mix_columns();
        }

        state.inv_shift_rows();
        state.inv_sub_bytes();
        state.add_round_key(words, 0);

        state.to_stream()
    }
}
