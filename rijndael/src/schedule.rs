//! Key expansion: the round-key word schedule

use crate::key::CipherKey;
use crate::rcon;
use crate::sbox;

/// The expanded round-key schedule: `4 * (num_rounds + 1)` words, derived
/// once per session from the cipher key and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchedule {
    words: Vec<u32>,
    num_rounds: usize,
}

/// Rotates a word one byte to the left; the most-significant byte moves to
/// the least-significant position.
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

impl KeySchedule {
    /// Expands `key` into the full schedule.
    ///
    /// The first `kl` words are the key itself (kl = key length in words).
    /// Every later word is the XOR of the word `kl` positions back with a
    /// transformed predecessor: at each multiple of `kl` the predecessor is
    /// rotated, substituted and mixed with a round constant; 256-bit keys
    /// additionally substitute (without rotation or round constant) at the
    /// half-way offset within each group of eight.
    pub fn expand(key: &CipherKey) -> Self {
        let kl = key.length_words();
        let num_rounds = key.num_rounds();
        let rcon = rcon::round_constants(key.rcon_len());

        let schedule_length = 4 * (num_rounds + 1);
        let mut words = Vec::with_capacity(schedule_length);

        for i in 0..schedule_length {
            let word = if i < kl {
                key.words()[i]
            } else {
                let prev = words[i - 1];
                let back = words[i - kl];

                if kl == 8 && (i - 4) % kl == 0 {
                    sbox::sub_word(prev) ^ back
                } else if (i - kl) % kl == 0 {
                    let rcon_word = (rcon[i / kl - 1] as u32) << 24;
                    (sbox::sub_word(rot_word(prev)) ^ rcon_word) ^ back
                } else {
                    prev ^ back
                }
            };
            words.push(word);
        }

        KeySchedule { words, num_rounds }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }
}
