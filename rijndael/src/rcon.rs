//! Round-constant table for the key expansion

/// Generates the first `len` round constants.
///
/// `rc[0]` is 1; each following entry doubles the previous one in GF(2^8),
/// reducing by 0x11b once the previous entry has its high bit set. `len` is
/// 10, 8 or 7 depending on the key size.
pub fn round_constants(len: usize) -> Vec<u8> {
    let mut rcon = Vec::with_capacity(len);
    for i in 0..len {
        if i == 0 {
            rcon.push(1);
        } else if rcon[i - 1] < 0x80 {
            rcon.push(rcon[i - 1] << 1);
        } else {
            rcon.push((((rcon[i - 1] as u16) << 1) ^ 0x11b) as u8);
        }
    }
    rcon
}
