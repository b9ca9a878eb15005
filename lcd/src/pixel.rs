//! # Packed Pixels
//!
//! In 4-level gray mode the ST7586 packs three horizontal pixels into each
//! DDRAM byte. The fields are not equal: the first two pixels get three bits,
//! the last gets two.
//!
//! ```text
//!  D7 D6 D5 | D4 D3 D2 | D1 D0
//!   left    |  middle  | right
//! ```
//!
//! The gray level (0-3) is carried by the top two bits of a field. A pixel at
//! level 3 fills its whole field, which is where the familiar asset bytes
//! come from:
//!
//! | Byte   | Pixels lit          |
//! |--------|---------------------|
//! | `0x00` | none                |
//! | `0x03` | right               |
//! | `0x1C` | middle              |
//! | `0x1F` | middle, right       |
//! | `0xE0` | left                |
//! | `0xFC` | left, middle        |
//! | `0xFF` | all three           |
//!
//! On this glass level 0 is the paper color and level 3 is ink.

use core::ops::Range;

use bit_field::BitField;

/// Pixels per packed byte.
pub const PIXELS_PER_BYTE: usize = 3;

/// Highest gray level.
pub const MAX_LEVEL: u8 = 3;

bitflags::bitflags! {
    /// Full-intensity pixel masks within a packed byte.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Triplet: u8 {
        const LEFT   = 0b1110_0000;
        const MIDDLE = 0b0001_1100;
        const RIGHT  = 0b0000_0011;
    }
}

impl Triplet {
    /// No pixel lit.
    pub const NONE: Triplet = Triplet::empty();
    /// All three pixels lit.
    pub const ALL: Triplet = Triplet::all();
}

// Field bit ranges, left to right.
const FIELDS: [Range<usize>; PIXELS_PER_BYTE] = [5..8, 2..5, 0..2];

/// Gray levels of the three pixels in `byte`, left to right.
pub fn levels(byte: u8) -> [u8; PIXELS_PER_BYTE] {
    FIELDS.map(|field| {
        let width = field.end - field.start;
        byte.get_bits(field) >> (width - 2)
    })
}

/// Pack three gray levels, left to right, into one DDRAM byte.
///
/// Levels above [`MAX_LEVEL`] are truncated to their low two bits.
pub fn pack(levels: [u8; PIXELS_PER_BYTE]) -> u8 {
    let mut byte = 0u8;
    for (field, level) in FIELDS.into_iter().zip(levels) {
        let level = level & MAX_LEVEL;
        let value = if field.end - field.start == 3 {
            (level << 1) | (level >> 1)
        } else {
            level
        };
        byte.set_bits(field, value);
    }
    byte
}

/// Reverse the pixel order of a packed byte.
///
/// An involution on every byte [`pack`] can produce. Bytes with stray low
/// bits in a 3-bit field are normalized on the way through.
pub fn mirror(byte: u8) -> u8 {
    let [left, middle, right] = levels(byte);
    pack([right, middle, left])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_bytes_decode_to_expected_pixels() {
        assert_eq!(levels(0x00), [0, 0, 0]);
        assert_eq!(levels(0xFF), [3, 3, 3]);
        assert_eq!(levels(0x03), [0, 0, 3]);
        assert_eq!(levels(0x1C), [0, 3, 0]);
        assert_eq!(levels(0x1F), [0, 3, 3]);
        assert_eq!(levels(0xE0), [3, 0, 0]);
        assert_eq!(levels(0xFC), [3, 3, 0]);
    }

    #[test]
    fn pack_reproduces_asset_bytes() {
        for byte in [0x00, 0x03, 0x1C, 0x1F, 0xE0, 0xE3, 0xFC, 0xFF] {
            assert_eq!(pack(levels(byte)), byte, "byte {byte:#04x}");
        }
    }

    #[test]
    fn intermediate_levels_survive_pack() {
        for level in 0..=MAX_LEVEL {
            let byte = pack([level, level, level]);
            assert_eq!(levels(byte), [level; 3]);
        }
    }

    #[test]
    fn mirror_swaps_outer_pixels() {
        assert_eq!(mirror(0x03), 0xE0);
        assert_eq!(mirror(0xE0), 0x03);
        assert_eq!(mirror(0x1F), 0xFC);
        assert_eq!(mirror(0xFC), 0x1F);
        assert_eq!(mirror(0x1C), 0x1C);
        assert_eq!(mirror(0x00), 0x00);
        assert_eq!(mirror(0xFF), 0xFF);
    }

    #[test]
    fn mirror_is_an_involution_on_packed_bytes() {
        for left in 0..=MAX_LEVEL {
            for middle in 0..=MAX_LEVEL {
                for right in 0..=MAX_LEVEL {
                    let byte = pack([left, middle, right]);
                    assert_eq!(mirror(mirror(byte)), byte);
                }
            }
        }
    }

    #[test]
    fn mirror_swaps_triplet_masks() {
        let pairs = [
            (Triplet::NONE, Triplet::NONE),
            (Triplet::RIGHT, Triplet::LEFT),
            (Triplet::MIDDLE | Triplet::RIGHT, Triplet::LEFT | Triplet::MIDDLE),
            (Triplet::MIDDLE, Triplet::MIDDLE),
            (Triplet::ALL, Triplet::ALL),
        ];
        for (mask, mirrored) in pairs {
            assert_eq!(mirror(mask.bits()), mirrored.bits());
            assert_eq!(mirror(mirrored.bits()), mask.bits());
        }
    }
}
