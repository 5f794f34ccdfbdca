//! Word-parallel byte tests over the four lanes of a `u32`.
//!
//! Each predicate looks at all four octets with a handful of integer
//! operations and no per-byte branching.

const LOW_BITS: u32 = 0x0101_0101;
const HIGH_BITS: u32 = 0x8080_8080;
const LOW_SEVEN: u32 = 0x7F7F_7F7F;

/// Broadcasts `byte` into all four lanes.
#[inline]
pub const fn repeat_byte(byte: u8) -> u32 {
    LOW_BITS * byte as u32
}

/// Returns `0x80` in every lane of `word` that is zero and `0x00` elsewhere.
///
/// Unlike the subtract-and-mask test in [`has_zero_byte`], no borrow crosses
/// lanes here, so the mask is exact lane by lane.
#[inline]
pub const fn zero_byte_mask(word: u32) -> u32 {
    !(((word & LOW_SEVEN) + LOW_SEVEN) | word | LOW_SEVEN)
}

/// Whether any lane of `word` is zero.
#[inline]
pub const fn has_zero_byte(word: u32) -> bool {
    word.wrapping_sub(LOW_BITS) & !word & HIGH_BITS != 0
}

/// Whether any lane of `word` equals `byte`.
#[inline]
pub const fn has_byte_equal_to(word: u32, byte: u8) -> bool {
    has_zero_byte(word ^ repeat_byte(byte))
}

/// Whether any lane of `word` is strictly less than `limit`.
///
/// # Panics
///
/// Panics if `limit > 128`; above that the lane borrow is no longer isolated.
#[inline]
pub const fn has_byte_less_than(word: u32, limit: u8) -> bool {
    assert!(limit <= 128, "limit must not exceed 128");
    word.wrapping_sub(repeat_byte(limit)) & !word & HIGH_BITS != 0
}

/// Lane mask of the octets equal to `byte`, `0x80` per matching lane.
#[inline]
pub const fn equal_byte_mask(word: u32, byte: u8) -> u32 {
    zero_byte_mask(word ^ repeat_byte(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lanes_below(word: u32, limit: u8) -> bool {
        word.to_be_bytes().iter().any(|&b| b < limit)
    }

    fn lanes_equal(word: u32, byte: u8) -> bool {
        word.to_be_bytes().contains(&byte)
    }

    fn place(filler: u8, lane: usize, byte: u8) -> u32 {
        let mut octets = [filler; 4];
        octets[lane] = byte;
        u32::from_be_bytes(octets)
    }

    #[test]
    fn repeat_byte_fills_lanes() {
        assert_eq!(repeat_byte(0), 0);
        assert_eq!(repeat_byte(0x41), 0x4141_4141);
        assert_eq!(repeat_byte(0xFF), u32::MAX);
    }

    #[test]
    fn less_than_single_lane_exhaustive() {
        for limit in 0..=128u8 {
            for filler in [0xFFu8, 0x80, 0x7F, limit] {
                for lane in 0..4 {
                    for byte in 0..=u8::MAX {
                        let word = place(filler, lane, byte);
                        assert_eq!(
                            has_byte_less_than(word, limit),
                            lanes_below(word, limit),
                            "word {word:#010x} limit {limit}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn equal_to_single_lane_exhaustive() {
        for needle in 0..=u8::MAX {
            for filler in [0x00u8, 0x01, 0x7F, 0x80, 0xFF, needle ^ 1] {
                for lane in 0..4 {
                    for byte in 0..=u8::MAX {
                        let word = place(filler, lane, byte);
                        assert_eq!(
                            has_byte_equal_to(word, needle),
                            lanes_equal(word, needle),
                            "word {word:#010x} needle {needle}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn zero_mask_is_exact_per_lane() {
        for lane in 0..4 {
            for byte in 0..=u8::MAX {
                for filler in [0x00u8, 0x01, 0x80, 0xFF] {
                    let word = place(filler, lane, byte);
                    let expected = word
                        .to_be_bytes()
                        .map(|b| if b == 0 { 0x80 } else { 0 });
                    assert_eq!(zero_byte_mask(word), u32::from_be_bytes(expected));
                }
            }
        }
    }

    #[test]
    fn adversarial_full_words() {
        let words = [
            0u32,
            u32::MAX,
            0x8080_8080,
            0x7F7F_7F7F,
            0x0100_0000,
            0x0000_0100,
            0x0101_0101,
        ];
        for word in words {
            assert_eq!(has_zero_byte(word), lanes_equal(word, 0));
            assert_eq!(has_byte_equal_to(word, 0x7F), lanes_equal(word, 0x7F));
            assert_eq!(has_byte_less_than(word, 32), lanes_below(word, 32));
            assert_eq!(has_byte_less_than(word, 128), lanes_below(word, 128));
        }
    }

    #[test]
    #[should_panic(expected = "limit must not exceed 128")]
    fn less_than_rejects_wide_limit() {
        has_byte_less_than(0, 129);
    }
}
