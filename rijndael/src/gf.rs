//! Arithmetic in GF(2^8) with the irreducible polynomial x^8 + x^4 + x^3 + x + 1

/// Multiplies two field elements.
///
/// Carry-less shift-and-xor multiply, reducing by 0x11b whenever the
/// intermediate overflows 8 bits. No lookup tables.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut result = 0;
    let mut a = a;
    let mut b = b;

    for _ in 0..8 {
        if b & 1 != 0 {
            result ^= a;
        }
        let high_bit = a & 0x80;
        a <<= 1;
        if high_bit != 0 {
            a ^= 0x1b; // the low 8 bits of 0x11b
        }
        b >>= 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_known_values() {
        // {57} x {83} = {c1}, the worked example from FIPS-197 section 4.2
        assert_eq!(mul(0x57, 0x83), 0xc1);
        assert_eq!(mul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn test_mul_identity_and_zero() {
        for b in 0..=255u8 {
            assert_eq!(mul(1, b), b);
            assert_eq!(mul(b, 1), b);
            assert_eq!(mul(0, b), 0);
        }
    }

    #[test]
    fn test_mul_commutes() {
        assert_eq!(mul(0x0e, 0x09), mul(0x09, 0x0e));
        assert_eq!(mul(0x02, 0xff), mul(0xff, 0x02));
    }

    #[test]
    fn test_doubling_reduces_above_0x80() {
        // {80} x {02} overflows and must be reduced
        assert_eq!(mul(0x80, 0x02), 0x1b);
    }
}
