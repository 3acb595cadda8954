//! GREASE filtering (RFC 8701)
//!
//! Reserved values `0x0A0A, 0x1A1A, ... 0xFAFA` are sent by clients to keep
//! peers tolerant of unknown codes; they carry no meaning and are dropped from
//! reported lists.

use crate::buffer::OutBuf;

/// True for a two-byte value of the `?A?A` GREASE pattern
#[must_use]
pub const fn is_grease(hi: u8, lo: u8) -> bool {
    hi == lo && (hi & 0x0f) == 0x0a
}

/// Append the two-byte values of `input` to `out`, skipping GREASE values.
///
/// An unpaired trailing byte is copied as is. Copying stops silently once
/// `out` has no room for the next value; the return value is the number of
/// bytes appended.
pub fn exclude_grease(input: &[u8], out: &mut OutBuf<'_>) -> usize {
    let start = out.len();
    let mut pairs = input.chunks_exact(2);

    for pair in pairs.by_ref() {
        if is_grease(pair[0], pair[1]) {
            continue;
        }
        if !out.push(pair) {
            return out.len() - start;
        }
    }
    if let [tail] = pairs.remainder() {
        out.push_byte(*tail);
    }

    out.len() - start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grease_value_matches() {
        for n in 0u8..16 {
            let b = (n << 4) | 0x0a;
            assert!(is_grease(b, b));
        }
        assert!(!is_grease(0x1a, 0x1b));
        assert!(!is_grease(0x0b, 0x0b));
    }
}
